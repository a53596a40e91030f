//! Core utilities and types for the autobind binding generator.
//!
//! This crate provides the file-writing primitives and string helpers used
//! across the autobind workspace.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, FileStore, FsStore, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{add_prefix, capitalize, drop_chars, lowercase_first, split_words};
