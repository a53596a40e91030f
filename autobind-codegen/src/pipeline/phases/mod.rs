//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the bindings file and collects diagnostics
//! - [`LowerPhase`] - resolves names and types into a `BindingSet`

mod lower;
mod validate;

pub use lower::{LowerPhase, binding_name, lower_entry};
pub use validate::{
    DuplicateNameLint, DuplicateTargetLint, EmptyNameLint, Lint, MissingObjectLint,
    ValidatePhase,
};
