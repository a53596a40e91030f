//! Built-in lints.

mod duplicate_name;
mod duplicate_target;
mod empty_name;
mod missing_object;

pub use duplicate_name::DuplicateNameLint;
pub use duplicate_target::DuplicateTargetLint;
pub use empty_name::EmptyNameLint;
pub use missing_object::MissingObjectLint;
