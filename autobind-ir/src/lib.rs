//! Binding representation types for the autobind generator.
//!
//! This crate provides the data model shared by the whole pipeline: type
//! descriptors, bindings, and the ordered binding set, plus the runtime-side
//! [`Binder`] that generated code performs its lookups against.
//!
//! # Architecture
//!
//! ```text
//! *.bindings.toml → autobind-manifest (parsing) → autobind-ir (BindingSet) → codegen
//! ```
//!
//! Type descriptors are explicit values attached to each binding when it is
//! created, so nothing downstream needs runtime type introspection.

mod binder;
mod binding;
mod types;

pub use binder::{Binder, LookupError};
pub use binding::{Binding, BindingSet, ObjectRef, is_duplicate};
pub use types::{ParseTypeError, TypeInfo, TypeKind};
