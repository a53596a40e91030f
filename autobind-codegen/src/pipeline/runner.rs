//! Pipeline orchestrator.

use std::sync::Arc;

use autobind_manifest::BindingsManifest;
use eyre::Result;
use tracing::debug;

use super::{
    CompilationContext, Phase,
    phases::{LowerPhase, ValidatePhase},
};
use crate::NamingStrategy;

/// Runs the built-in phases (validate, lower) followed by any extra phases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .phase(MyCustomPhase)
///     .run(manifest, "MainPanel", naming)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a bindings file.
    ///
    /// # Errors
    ///
    /// Returns an error if validation reports errors or any phase fails
    /// fatally. Diagnostics collected so far are lost with the context, so
    /// callers that want to print them should use [`Pipeline::run_context`].
    pub fn run(
        &self,
        manifest: BindingsManifest,
        class_name: impl Into<String>,
        naming: Arc<dyn NamingStrategy>,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest, class_name, naming);
        self.run_context(&mut ctx)?;
        Ok(ctx)
    }

    /// Run every phase on an existing context.
    pub fn run_context(&self, ctx: &mut CompilationContext) -> Result<()> {
        run_phase(&self.validate, ctx)?;
        run_phase(&LowerPhase, ctx)?;

        for phase in &self.phases {
            run_phase(phase.as_ref(), ctx)?;
        }

        Ok(())
    }
}

fn run_phase(phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
    debug!(phase = phase.name(), "{}", phase.description());
    phase.run(ctx)
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::NamingEngine;

    fn parse(content: &str) -> BindingsManifest {
        content.parse().expect("Failed to parse test bindings")
    }

    #[test]
    fn test_pipeline_lowers_bindings() {
        let manifest = parse(
            r#"
            [[bindings]]
            object = "Canvas/ScoreText"
            type = "UnityEngine.UI.Text"

            [[bindings]]
            name = "_root"
            object = "Canvas"
            "#,
        );

        let mut ctx = Pipeline::new()
            .run(manifest, "Panel", NamingEngine::default().strategy())
            .unwrap();
        let bindings = ctx.take_bindings().unwrap();

        let names: Vec<&str> = bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["_scoreText", "_root"]);
    }

    #[test]
    fn test_pipeline_fails_on_errors() {
        let manifest = parse(
            r#"
            [[bindings]]
            name = ""
            object = "Canvas"
            "#,
        );

        let mut ctx =
            CompilationContext::new(manifest, "Panel", NamingEngine::default().strategy());
        let result = Pipeline::new().run_context(&mut ctx);

        assert!(result.is_err());
        assert_eq!(ctx.error_count(), 1);
        assert!(ctx.bindings.is_none());
    }

    #[test]
    fn test_extra_phases_run_after_lowering() {
        struct CountBindings(Arc<AtomicUsize>);

        impl Phase for CountBindings {
            fn name(&self) -> &'static str {
                "count"
            }

            fn description(&self) -> &'static str {
                "Count lowered bindings"
            }

            fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
                let count = ctx.bindings.as_ref().map_or(0, |b| b.len());
                self.0.store(count, Ordering::SeqCst);
                Ok(())
            }
        }

        let counter = Arc::new(AtomicUsize::new(0));
        let manifest = parse("[[bindings]]\nobject = \"A\"\n\n[[bindings]]\nobject = \"B\"\n");

        Pipeline::new()
            .phase(CountBindings(counter.clone()))
            .run(manifest, "Panel", NamingEngine::default().strategy())
            .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
