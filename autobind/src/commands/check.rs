use std::path::PathBuf;

use autobind_core::FsStore;
use autobind_manifest::{BindingsFile, ConfigFile};
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Bindings file to validate
    pub bindings: PathBuf,

    /// Path to autobind.toml
    #[arg(short, long, default_value = ops::CONFIG_FILE)]
    pub config: PathBuf,

    /// Class name (defaults to the bindings file's `class`, then its file name)
    #[arg(long)]
    pub class: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let bindings = BindingsFile::open(&self.bindings).unwrap_or_exit();

        let report = ops::check(
            config.config(),
            &ops::config_root(&self.config),
            &bindings,
            self.class.as_deref(),
            &FsStore,
        )?;

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
