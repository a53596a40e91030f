//! Check command report data structures.

use std::path::PathBuf;

use autobind_codegen::pipeline::{Diagnostic, Severity};
use serde::Serialize;

use super::{
    describe,
    output::{Output, Report},
};

/// Report data from bindings and template validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub bindings_path: PathBuf,
    pub class_name: String,
    pub diagnostics: Vec<Diagnostic>,
    pub templates: Vec<TemplateCheck>,
}

/// Declared vs. supplied placeholders for one language's template.
#[derive(Debug, Serialize)]
pub struct TemplateCheck {
    pub language: String,
    pub template: PathBuf,
    /// Placeholders the template declares, first-seen order.
    pub declared: Vec<String>,
    /// Declared but never supplied; left verbatim in the output.
    pub unsupplied: Vec<String>,
    /// Supplied but not declared; silently dropped.
    pub unused: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors, every template readable).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
            && self.templates.iter().all(|t| t.error.is_none())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            match diag.severity {
                Severity::Error => out.error(&describe(diag)),
                Severity::Warning => out.warning(&describe(diag)),
                Severity::Info => out.preformatted(&format!("info: {}", describe(diag))),
            }
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        for template in &self.templates {
            out.section(&format!(
                "{} ({})",
                template.language,
                template.template.display()
            ));
            if let Some(error) = &template.error {
                out.failed_item(error);
                continue;
            }
            out.key_value_indented("placeholders", &template.declared.join(", "));
            for name in &template.unsupplied {
                out.warning(&format!(
                    "{}: ${{{}}} is not supplied and will be left as-is",
                    template.language, name
                ));
            }
            for name in &template.unused {
                out.list_item(&format!("{} is supplied but not used", name));
            }
        }

        if self.is_valid() {
            out.newline();
            out.preformatted(&format!(
                "✓ {} is valid ({})",
                self.bindings_path.display(),
                self.class_name
            ));
        }
    }
}
