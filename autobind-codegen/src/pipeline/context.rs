//! Compilation context passed through pipeline phases.

use std::sync::Arc;

use autobind_ir::BindingSet;
use autobind_manifest::BindingsManifest;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::NamingStrategy;

/// State carried through each phase, accumulating results and diagnostics.
pub struct CompilationContext {
    /// The bindings file being compiled.
    pub manifest: BindingsManifest,
    pub class_name: String,
    /// Strategy used to suggest names for unnamed bindings.
    pub naming: Arc<dyn NamingStrategy>,
    /// The lowered bindings (populated by LowerPhase).
    pub bindings: Option<BindingSet>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(
        manifest: BindingsManifest,
        class_name: impl Into<String>,
        naming: Arc<dyn NamingStrategy>,
    ) -> Self {
        Self {
            manifest,
            class_name: class_name.into(),
            naming,
            bindings: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the lowered bindings out of the context.
    pub fn take_bindings(&mut self) -> Result<BindingSet> {
        self.bindings
            .take()
            .ok_or_else(|| eyre!("bindings not lowered - did LowerPhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamingEngine;

    fn context() -> CompilationContext {
        CompilationContext::new(
            BindingsManifest::default(),
            "Panel",
            NamingEngine::default().strategy(),
        )
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = context();

        ctx.add_diagnostic(Diagnostic::error("test", "test error"));
        ctx.add_diagnostic(Diagnostic::warning("test", "test warning"));
        ctx.add_diagnostic(Diagnostic::info("test", "note"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_take_bindings_before_lowering_fails() {
        let mut ctx = context();
        assert!(ctx.take_bindings().is_err());
    }
}
