//! Config and bindings file parsing for the autobind generator.
//!
//! Two TOML documents are handled here:
//!
//! - `autobind.toml`: output paths, naming convention and target languages
//!   ([`GeneratorConfig`]).
//! - `*.bindings.toml`: the class name and ordered binding list of one panel
//!   ([`BindingsManifest`]).
//!
//! Errors are [`miette`] diagnostics carrying the source text and a span.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod bindings;
mod config;
mod error;
mod file;
mod language;
mod naming;
mod validate;

pub use bindings::{BindingEntry, BindingsManifest};
pub use config::{DEFAULT_CONFIG, GeneratorConfig, LanguageConfig, PathsConfig};
pub use error::{Error, Result, SourceContext};
pub use file::{BindingsFile, ConfigFile, class_name_from_path};
pub use language::Language;
pub use naming::{NamingConfig, NamingStrategyKind};
