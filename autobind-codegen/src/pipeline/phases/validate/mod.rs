//! Validate phase - runs lints on the bindings file.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{DuplicateNameLint, DuplicateTargetLint, EmptyNameLint, MissingObjectLint};
use tracing::trace;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the bindings file using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(EmptyNameLint),
                Box::new(DuplicateNameLint),
                Box::new(DuplicateTargetLint),
                Box::new(MissingObjectLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check bindings integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            trace!(lint = lint.name(), "{}", lint.description());
            lint.check(&ctx.manifest, ctx.naming.as_ref(), &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use autobind_manifest::BindingsManifest;

    use super::*;
    use crate::{NamingEngine, NamingStrategy, pipeline::Diagnostic};

    fn context(content: &str) -> CompilationContext {
        let manifest: BindingsManifest = content.parse().expect("Failed to parse test bindings");
        CompilationContext::new(manifest, "Panel", NamingEngine::default().strategy())
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            vec!["empty-name", "duplicate-name", "duplicate-target", "missing-object"]
        );
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(
                &self,
                _manifest: &BindingsManifest,
                _naming: &dyn NamingStrategy,
                diagnostics: &mut Vec<Diagnostic>,
            ) {
                diagnostics.push(Diagnostic::error("test", "forced error"));
            }
        }

        let mut ctx = context("");
        let result = ValidatePhase::empty().with_lint(AlwaysErrorLint).run(&mut ctx);

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Validation failed with 1 error(s)");
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = context(
            r#"
            [[bindings]]
            name = "_lost"
            type = "UnityEngine.UI.Text"
            "#,
        );

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }
}
