//! In-memory file store for generator tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use autobind_core::FileStore;
use eyre::{Result, eyre};

/// In-memory [`FileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), content.into());
        self
    }

    /// Make every write fail.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<String> {
        self.get(path)
            .ok_or_else(|| eyre!("failed to read '{}': no such file", path.display()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if self.read_only {
            return Err(eyre!("failed to write '{}': read-only store", path.display()));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}
