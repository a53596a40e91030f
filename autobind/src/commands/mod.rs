mod add;
mod check;
mod generate;
mod init;
mod name;

use add::AddCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use name::NameCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for autobind_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "autobind")]
#[command(version)]
#[command(about = "Generate typed UI component bindings from a TOML binding list")]
pub(crate) struct Cli {
    /// Log generation steps (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Add(cmd) => cmd.run(),
            Commands::Name(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default autobind.toml and templates
    Init(InitCommand),

    /// Generate binding code for every configured language
    Generate(GenerateCommand),

    /// Validate a bindings file and the language templates
    Check(CheckCommand),

    /// Add a binding to a bindings file
    Add(AddCommand),

    /// Preview the names a naming strategy produces
    Name(NameCommand),
}
