//! Bindings compilation pipeline.
//!
//! A [`Pipeline`] turns a parsed bindings file into a [`BindingSet`]
//! ready for generation:
//!
//! - Explicit phase boundaries (validate → lower)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use autobind_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().run(manifest, "MainPanel", naming)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! let bindings = ctx.take_bindings()?;
//! ```
//!
//! [`BindingSet`]: autobind_ir::BindingSet

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
