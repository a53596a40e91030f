//! Lint for bindings whose target object is gone.

use autobind_manifest::BindingsManifest;

use super::super::Lint;
use crate::{NamingStrategy, pipeline::Diagnostic};

/// Lint that warns about entries without an `object`.
///
/// Such bindings are kept in the file but left out of generated code.
pub struct MissingObjectLint;

impl Lint for MissingObjectLint {
    fn name(&self) -> &'static str {
        "missing-object"
    }

    fn description(&self) -> &'static str {
        "Warn about bindings whose target object is missing"
    }

    fn check(
        &self,
        manifest: &BindingsManifest,
        _naming: &dyn NamingStrategy,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (index, entry) in manifest.bindings.iter().enumerate() {
            if entry.object.is_some() {
                continue;
            }
            let label = entry.name.as_deref().unwrap_or("<unnamed>");
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("binding '{}' has no target object and will be skipped", label),
                )
                .at_binding(index),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamingEngine;

    #[test]
    fn test_missing_object_warns() {
        let manifest: BindingsManifest = r#"
            [[bindings]]
            name = "_root"
            object = "Canvas"

            [[bindings]]
            name = "_lost"
            type = "UnityEngine.UI.Text"
        "#
        .parse()
        .unwrap();
        let naming = NamingEngine::default().strategy();
        let mut diagnostics = Vec::new();

        MissingObjectLint.check(&manifest, naming.as_ref(), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("_lost"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("bindings[1]"));
    }
}
