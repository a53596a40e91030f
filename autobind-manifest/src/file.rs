use std::path::{Path, PathBuf};

use crate::{BindingEntry, BindingsManifest, Error, GeneratorConfig, Result};

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })
}

fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| {
        Box::new(Error::Write {
            path: path.to_path_buf(),
            source: e,
        })
    })
}

/// Represents an `autobind.toml` file with both raw content and parsed config.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: GeneratorConfig,
}

impl ConfigFile {
    /// Open and parse an `autobind.toml` file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read(&path)?;
        let config = GeneratorConfig::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn into_config(self) -> GeneratorConfig {
        self.config
    }
}

/// Represents a bindings file with both raw content and parsed manifest.
pub struct BindingsFile {
    path: PathBuf,
    content: String,
    manifest: BindingsManifest,
}

impl BindingsFile {
    /// Open and parse a bindings file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read(&path)?;
        let manifest =
            BindingsManifest::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &BindingsManifest {
        &self.manifest
    }

    /// Class name declared in the file, or derived from the file name.
    pub fn class_name(&self) -> String {
        match &self.manifest.class {
            Some(class) => class.clone(),
            None => class_name_from_path(&self.path),
        }
    }

    /// Update content and re-parse the manifest.
    pub fn set_content(&mut self, content: String) -> Result<()> {
        let filename = self.path.display().to_string();
        let manifest = BindingsManifest::from_str_with_filename(&content, &filename)?;
        self.content = content;
        self.manifest = manifest;
        Ok(())
    }

    /// Append a `[[bindings]]` table, keeping existing text untouched.
    pub fn append_binding(&mut self, entry: &BindingEntry) -> Result<()> {
        let mut content = self.content.trim_end().to_string();
        if !content.is_empty() {
            content.push_str("\n\n");
        }
        content.push_str(&binding_section(entry));
        self.set_content(content)
    }

    /// Save the current content to disk.
    pub fn save(&self) -> Result<()> {
        write(&self.path, &self.content)
    }
}

/// Derive a class name from a bindings file path: `MainPanel.bindings.toml`
/// yields `MainPanel`.
pub fn class_name_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .unwrap_or_default()
        .to_string()
}

/// Render one `[[bindings]]` table.
fn binding_section(entry: &BindingEntry) -> String {
    let mut section = String::from("[[bindings]]\n");
    if let Some(name) = &entry.name {
        section.push_str(&format!("name = {}\n", quote(name)));
    }
    if let Some(object) = &entry.object {
        section.push_str(&format!("object = {}\n", quote(object.path())));
    }
    if let Some(ty) = &entry.ty {
        section.push_str(&format!("type = {}\n", quote(ty)));
    }
    section
}

fn quote(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
