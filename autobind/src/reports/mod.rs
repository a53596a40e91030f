//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod generate;
mod init;
mod name;
mod output;

use autobind_codegen::pipeline::Diagnostic;
pub use check::{CheckReport, TemplateCheck};
pub use generate::{GenerateReport, LanguageOutcome};
pub use init::InitReport;
pub use name::NameReport;
pub use output::{Report, TerminalOutput};

/// Message with its location on a second line, compiler style.
pub(crate) fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
