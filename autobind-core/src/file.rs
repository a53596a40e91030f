use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Storage backend used to read templates and write generated sources.
///
/// Generators never touch the file system directly; they go through a store
/// so the same pipeline can run against disk or memory.
pub trait FileStore {
    /// Read the whole file as UTF-8 text.
    fn read(&self, path: &Path) -> Result<String>;

    /// Write `content` to `path`, creating parent directories and replacing
    /// any existing file.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Check whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileStore`] backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        write_file(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file through the given store
    fn write(&self, base: &Path, store: &dyn FileStore) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                store.write(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if store.exists(&path) {
                    Ok(WriteResult::Skipped)
                } else {
                    store.write(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A concrete file with already-rendered content.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a file that is always overwritten.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file through `store` according to its rules.
    pub fn write(&self, store: &dyn FileStore) -> Result<WriteResult> {
        if self.rules.overwrite == Overwrite::IfMissing && store.exists(&self.path) {
            return Ok(WriteResult::Skipped);
        }
        store.write(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated bindings)
    #[default]
    Always,
    /// Only create if file doesn't exist (config and templates)
    IfMissing,
}
