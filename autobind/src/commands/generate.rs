use std::path::PathBuf;

use autobind_core::FsStore;
use autobind_manifest::{BindingsFile, ConfigFile};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Bindings file (e.g., MainPanel.bindings.toml)
    pub bindings: PathBuf,

    /// Path to autobind.toml
    #[arg(short, long, default_value = ops::CONFIG_FILE)]
    pub config: PathBuf,

    /// Language id to generate (repeatable, defaults to all configured)
    #[arg(short, long)]
    pub language: Vec<String>,

    /// Class name (defaults to the bindings file's `class`, then its file name)
    #[arg(long)]
    pub class: Option<String>,

    /// Output root (overrides paths.base_output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let bindings = BindingsFile::open(&self.bindings).unwrap_or_exit();

        let report = ops::generate(
            config.config(),
            &ops::config_root(&self.config),
            &bindings,
            GenerateOptions {
                languages: &self.language,
                class_name: self.class.as_deref(),
                output: self.output.as_deref(),
                dry_run: self.dry_run,
            },
            &FsStore,
        )?;

        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }

        Ok(())
    }
}
