//! Lint for two bindings generating the same member name.

use std::collections::HashMap;

use autobind_manifest::BindingsManifest;

use super::super::Lint;
use crate::{
    NamingStrategy,
    pipeline::{Diagnostic, phases::binding_name},
};

/// Lint that rejects entries whose effective names collide.
///
/// Unnamed entries are compared under the name lowering would give them.
pub struct DuplicateNameLint;

impl Lint for DuplicateNameLint {
    fn name(&self) -> &'static str {
        "duplicate-name"
    }

    fn description(&self) -> &'static str {
        "Check generated member names are unique"
    }

    fn check(
        &self,
        manifest: &BindingsManifest,
        naming: &dyn NamingStrategy,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, entry) in manifest.bindings.iter().enumerate() {
            // Unparseable types are reported when the file is loaded
            let Ok(ty) = entry.type_info() else {
                continue;
            };
            let name = binding_name(index, entry, &ty, naming);
            if name.trim().is_empty() {
                continue;
            }

            match seen.get(&name) {
                Some(first) => diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "binding name '{}' is already used by bindings[{}]",
                            name, first
                        ),
                    )
                    .at_binding(index),
                ),
                None => {
                    seen.insert(name, index);
                }
            }
        }
    }
}
