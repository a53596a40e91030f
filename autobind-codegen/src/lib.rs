//! Shared code generation utilities for the autobind binding generator.
//!
//! This crate provides the language-agnostic half of binding generation,
//! used by the per-language generators (`autobind-codegen-csharp`,
//! `autobind-codegen-lua`).
//!
//! # Module Organization
//!
//! - [`naming`] - Naming strategies (CamelCase, PascalCase, Hungarian) and the lazy [`NamingEngine`]
//! - [`prefix`] - Hungarian type-prefix resolution with a memoizing cache
//! - [`template`] - `${Key}` placeholder substitution
//! - [`builder`] - Indented line building for code blocks
//! - [`language`] - The [`BindingCodegen`] trait implemented by each target language
//! - [`pipeline`] - Validation and lowering of bindings files
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod language;
pub mod naming;
pub mod pipeline;
pub mod prefix;
pub mod template;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, Indent};
pub use language::{BindingCodegen, GeneratedArtifact, GeneratorContext, present_bindings};
pub use naming::{NamingEngine, NamingStrategy, build_strategy};
pub use prefix::TypePrefixResolver;
pub use template::{Placeholders, Template};
