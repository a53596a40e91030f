//! Lint for blank binding names.

use autobind_manifest::BindingsManifest;

use super::super::Lint;
use crate::{NamingStrategy, pipeline::Diagnostic};

/// Lint that rejects an explicit `name` that is empty or whitespace.
///
/// Omitting `name` is fine: lowering suggests one from the object.
pub struct EmptyNameLint;

impl Lint for EmptyNameLint {
    fn name(&self) -> &'static str {
        "empty-name"
    }

    fn description(&self) -> &'static str {
        "Check explicit binding names are not blank"
    }

    fn check(
        &self,
        manifest: &BindingsManifest,
        _naming: &dyn NamingStrategy,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (index, entry) in manifest.bindings.iter().enumerate() {
            let Some(name) = &entry.name else {
                continue;
            };
            if name.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::error("validate", "binding name must not be empty")
                        .at_binding(index),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamingEngine;

    fn check(content: &str) -> Vec<Diagnostic> {
        let manifest: BindingsManifest = content.parse().expect("Failed to parse test bindings");
        let naming = NamingEngine::default().strategy();
        let mut diagnostics = Vec::new();
        EmptyNameLint.check(&manifest, naming.as_ref(), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_blank_names() {
        let diagnostics = check(
            r#"
            [[bindings]]
            name = ""
            object = "A"

            [[bindings]]
            name = "  "
            object = "B"

            [[bindings]]
            object = "C"
            "#,
        );

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_error()));
        assert_eq!(diagnostics[0].location.as_deref(), Some("bindings[0]"));
        assert_eq!(diagnostics[1].location.as_deref(), Some("bindings[1]"));
    }
}
