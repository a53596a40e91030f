//! Lua binding generator.
//!
//! Renders `{ClassName}.Bindings.lua` modules for a scripting layer that
//! reaches host types through `CS.*`, with EmmyLua field annotations.

mod generator;

pub mod files;

pub use autobind_codegen::{BindingCodegen, GeneratedArtifact, GeneratorContext};
pub use files::{DEFAULT_TEMPLATE, LuaTemplate};
pub use generator::{Generator, PLACEHOLDERS};
