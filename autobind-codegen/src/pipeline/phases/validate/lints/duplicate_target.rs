//! Lint for two bindings pointing at the same thing.

use autobind_ir::{Binding, BindingSet};
use autobind_manifest::BindingsManifest;

use super::super::Lint;
use crate::{NamingStrategy, pipeline::Diagnostic};

/// Lint that warns when two entries bind the same node, or the same
/// component type on the same object.
pub struct DuplicateTargetLint;

impl Lint for DuplicateTargetLint {
    fn name(&self) -> &'static str {
        "duplicate-target"
    }

    fn description(&self) -> &'static str {
        "Warn about bindings that target the same object and type"
    }

    fn check(
        &self,
        manifest: &BindingsManifest,
        _naming: &dyn NamingStrategy,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        // Indices into `manifest.bindings` for each accepted binding
        let mut indices: Vec<usize> = Vec::new();
        let mut accepted = BindingSet::new();

        for (index, entry) in manifest.bindings.iter().enumerate() {
            let Ok(ty) = entry.type_info() else {
                continue;
            };
            let candidate = Binding {
                name: entry.name.clone().unwrap_or_default(),
                object: entry.object.clone(),
                ty,
            };

            if let Some(found) = accepted.find_duplicate(&candidate, None) {
                let target = candidate.object.as_ref().map_or("", |o| o.path());
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "'{}' is already bound as {} by bindings[{}]",
                            target,
                            candidate.ty.full_name,
                            indices[found]
                        ),
                    )
                    .at_binding(index),
                );
                continue;
            }

            indices.push(index);
            accepted.push(candidate);
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
        DuplicateTargetLint.check(&manifest, naming.as_ref(), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_same_component_twice() {
        let diagnostics = check(
            r#"
            [[bindings]]
            name = "_a"
            object = "Canvas/Title"
            type = "UnityEngine.UI.Text"

            [[bindings]]
            name = "_b"
            object = "Canvas/Title"
            type = "UnityEngine.UI.Text"
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("bindings[0]"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("bindings[1]"));
    }

    #[test]
    fn test_node_and_component_on_same_object() {
        let diagnostics = check(
            r#"
            [[bindings]]
            name = "_title"
            object = "Canvas/Title"

            [[bindings]]
            name = "_titleText"
            object = "Canvas/Title"
            type = "UnityEngine.UI.Text"

            [[bindings]]
            name = "_lostA"
            [[bindings]]
            name = "_lostB"
            "#,
        );

        assert!(diagnostics.is_empty());
    }
}
