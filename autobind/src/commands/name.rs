use std::path::PathBuf;

use autobind_manifest::{ConfigFile, NamingConfig, NamingStrategyKind};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NameCommand {
    /// Node name to convert (e.g., ScoreText)
    pub name: String,

    /// Component type (defaults to the object itself)
    #[arg(short = 't', long = "type")]
    pub ty: Option<String>,

    /// Naming strategy: camel-case, pascal-case or hungarian
    #[arg(short, long)]
    pub strategy: Option<String>,

    #[arg(long)]
    pub field_prefix: Option<String>,

    #[arg(long)]
    pub property_prefix: Option<String>,

    /// Path to autobind.toml (used for any setting not given)
    #[arg(short, long, default_value = ops::CONFIG_FILE)]
    pub config: PathBuf,
}

impl NameCommand {
    pub fn run(&self) -> Result<()> {
        let mut naming = if self.config.exists() {
            ConfigFile::open(&self.config).unwrap_or_exit().into_config().naming
        } else {
            NamingConfig::default()
        };

        if let Some(strategy) = &self.strategy {
            naming.strategy = strategy.parse::<NamingStrategyKind>().unwrap_or_exit();
        }
        if let Some(prefix) = &self.field_prefix {
            naming.field_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.property_prefix {
            naming.property_prefix = prefix.clone();
        }

        let report = ops::name(&self.name, self.ty.as_deref(), naming)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
