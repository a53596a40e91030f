use std::path::PathBuf;

use autobind_codegen::NamingEngine;
use autobind_manifest::{BindingsFile, ConfigFile, GeneratorConfig};
use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct AddCommand {
    /// Bindings file to append to
    pub bindings: PathBuf,

    /// Scene path of the target object (e.g., Canvas/Header/ScoreText)
    #[arg(long)]
    pub object: String,

    /// Component type (defaults to the object itself)
    #[arg(short = 't', long = "type")]
    pub ty: Option<String>,

    /// Field name (defaults to one suggested by the naming strategy)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Path to autobind.toml (naming settings; defaults apply if absent)
    #[arg(short, long, default_value = ops::CONFIG_FILE)]
    pub config: PathBuf,

    /// Add duplicate targets without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl AddCommand {
    pub fn run(&self) -> Result<()> {
        let naming = if self.config.exists() {
            ConfigFile::open(&self.config).unwrap_or_exit().into_config().naming
        } else {
            GeneratorConfig::default().naming
        };
        let naming = NamingEngine::new(naming).strategy();

        let mut file = BindingsFile::open(&self.bindings).unwrap_or_exit();
        let plan = ops::plan_add(
            &file,
            naming.as_ref(),
            &self.object,
            self.ty.as_deref(),
            self.name.as_deref(),
        )?;

        if let Some((index, existing)) = &plan.duplicate_of {
            eprintln!(
                "warning: '{}' is already bound by bindings[{}] ('{}')",
                self.object, index, existing
            );
            if !self.yes && !Self::confirm()? {
                println!("Cancelled");
                return Ok(());
            }
        }

        file.append_binding(&plan.entry).unwrap_or_exit();
        file.save().unwrap_or_exit();
        println!("Added binding '{}' -> {}", plan.name, self.object);

        Ok(())
    }

    fn confirm() -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Add it anyway?")
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}
