//! Core operations.
//!
//! This module contains the business logic for autobind commands,
//! separated from CLI argument parsing and output rendering.

pub mod add;
pub mod check;
pub mod generate;
pub mod init;
pub mod name;

use std::path::{Path, PathBuf};

pub use add::plan_add;
pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use init::{CONFIG_FILE, init};
pub use name::name;

/// Directory the paths in a config file are relative to.
pub fn config_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
