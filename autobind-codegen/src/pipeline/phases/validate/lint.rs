//! Lint trait for bindings file validation.

use autobind_manifest::BindingsManifest;

use crate::{NamingStrategy, pipeline::Diagnostic};

/// A lint that checks a bindings file for issues.
///
/// Lints see the entries before lowering, so names of unnamed entries must
/// be derived through `naming` the same way lowering does.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the bindings file and add any diagnostics.
    fn check(
        &self,
        manifest: &BindingsManifest,
        naming: &dyn NamingStrategy,
        diagnostics: &mut Vec<Diagnostic>,
    );
}
