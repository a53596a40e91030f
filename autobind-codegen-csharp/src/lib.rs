//! C# binding generator.
//!
//! Renders `{ClassName}.Bindings.cs` partial classes from a template with
//! the placeholders listed in [`PLACEHOLDERS`].

mod generator;

pub mod files;

pub use autobind_codegen::{BindingCodegen, GeneratedArtifact, GeneratorContext};
pub use files::{CSharpTemplate, DEFAULT_TEMPLATE};
pub use generator::{Generator, PLACEHOLDERS};
