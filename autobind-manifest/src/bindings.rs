//! `*.bindings.toml` schema.

use std::{path::Path, str::FromStr};

use autobind_ir::{ObjectRef, ParseTypeError, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, SourceContext,
    validate::{find_array_table_span, find_quoted_span},
};

/// One `[[bindings]]` entry as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    /// Field name. Absent means "suggest one from the object name".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scene path of the target. Absent means the object is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectRef>,
    /// Type text. Absent means the node itself.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
}

impl BindingEntry {
    /// Resolve the declared type; no type means the node itself.
    pub fn type_info(&self) -> std::result::Result<TypeInfo, ParseTypeError> {
        match &self.ty {
            Some(text) => text.parse(),
            None => Ok(TypeInfo::node()),
        }
    }
}

/// Root schema for a bindings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingsManifest {
    /// Generated class name. Defaults to the file name stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub bindings: Vec<BindingEntry>,
}

impl FromStr for BindingsManifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_bindings(s, "bindings.toml")
    }
}

impl BindingsManifest {
    /// Parse a bindings file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_bindings(&content, &path.display().to_string())
    }

    /// Parse with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_bindings(content, filename)
    }
}

fn parse_bindings(content: &str, filename: &str) -> Result<BindingsManifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: BindingsManifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_bindings(&manifest, &ctx)?;
    Ok(manifest)
}

/// Structural checks only; semantic lints (duplicates, missing objects) run
/// in the codegen pipeline so they can be reported as warnings.
fn validate_bindings(manifest: &BindingsManifest, ctx: &SourceContext) -> Result<()> {
    if let Some(class) = &manifest.class {
        if let Some(reason) = invalid_class_name(class) {
            return Err(ctx.validation_error_at(
                format!("invalid class name '{}': {}", class, reason),
                find_quoted_span(ctx.src(), class, 0),
            ));
        }
    }

    for (index, entry) in manifest.bindings.iter().enumerate() {
        if let Err(e) = entry.type_info() {
            let span = entry
                .ty
                .as_deref()
                .and_then(|ty| find_quoted_span(ctx.src(), ty, 0))
                .or_else(|| find_array_table_span(ctx.src(), "bindings", index));
            return Err(ctx.validation_error_at(format!("bindings[{}]: {}", index, e), span));
        }
    }

    Ok(())
}

fn invalid_class_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }
    if chars.all(|c| c.is_alphanumeric() || c == '_') {
        None
    } else {
        Some("use only letters, numbers, and underscores")
    }
}
