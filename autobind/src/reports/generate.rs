//! Generate command report data structures.

use autobind_codegen::GeneratedArtifact;

use super::output::{Output, Report};

/// Report data from one `generate` run across every selected language.
#[derive(Debug)]
pub struct GenerateReport {
    pub class_name: String,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    pub binding_count: usize,
    /// Bindings left out because their object is missing.
    pub skipped: usize,
    pub dry_run: bool,
    /// One entry per selected language, in config order.
    pub outcomes: Vec<LanguageOutcome>,
}

/// Result of generating one language. Failures never affect other languages.
#[derive(Debug)]
pub struct LanguageOutcome {
    pub id: String,
    pub result: Result<GeneratedArtifact, String>,
}

impl GenerateReport {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.dry_run {
            for outcome in &self.outcomes {
                if let Ok(artifact) = &outcome.result {
                    out.divider(&artifact.path.display().to_string());
                    out.preformatted(&artifact.content);
                }
            }
            out.divider("Summary");
        }

        let mut header = format!(
            "{} ({} binding{}",
            self.class_name,
            self.binding_count,
            if self.binding_count == 1 { "" } else { "s" }
        );
        if self.skipped > 0 {
            header.push_str(&format!(", {} skipped", self.skipped));
        }
        header.push(')');
        out.preformatted(&header);
        out.newline();

        out.section(if self.dry_run {
            "Would generate"
        } else {
            "Generated"
        });
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(artifact) => {
                    out.added_item(&format!("{}: {}", outcome.id, artifact.path.display()))
                }
                Err(message) => out.failed_item(&format!("{}: {}", outcome.id, message)),
            }
        }

        if self.has_failures() {
            out.newline();
            out.error(&format!(
                "{} of {} language(s) failed",
                self.failed(),
                self.outcomes.len()
            ));
        }
    }
}
