//! `${Key}` placeholder templates.
//!
//! Substitution is literal: no escaping, no conditionals, no loops. Tokens
//! with no supplied value are left in the output verbatim.
//!
//! A key is a non-empty run of ASCII letters, digits and underscores.
//! Anything else between `${` and `}` (`${Type.Name}`, `${Class Name}`,
//! `${名前}`) is not a placeholder and is copied through unchanged.

use std::path::Path;

use autobind_core::FileStore;
use eyre::{Result, WrapErr};
use indexmap::IndexMap;

/// Values for template placeholders, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: IndexMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a scalar value such as a class or namespace name.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set a generated code block. Trailing whitespace is trimmed so the
    /// template controls the surrounding layout.
    pub fn block(&mut self, key: impl Into<String>, code: impl AsRef<str>) -> &mut Self {
        self.values
            .insert(key.into(), code.as_ref().trim_end().to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A loaded template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Load a template through `store`.
    pub fn load(path: &Path, store: &dyn FileStore) -> Result<Self> {
        let text = store
            .read(path)
            .wrap_err_with(|| format!("failed to load template '{}'", path.display()))?;
        Ok(Self::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholder names declared in the template, first occurrence order,
    /// without duplicates.
    pub fn placeholders(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (_, key, _) in tokens(&self.text) {
            if !names.iter().any(|n| n == key) {
                names.push(key.to_string());
            }
        }
        names
    }

    /// Substitute every `${Key}` that has a value.
    ///
    /// Substituted text is never rescanned, so a value containing `${X}`
    /// is emitted as-is.
    pub fn render(&self, values: &Placeholders) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;

        for (start, key, end) in tokens(&self.text) {
            if let Some(value) = values.get(key) {
                out.push_str(&self.text[last..start]);
                out.push_str(value);
                last = end;
            }
        }

        out.push_str(&self.text[last..]);
        out
    }
}

/// Find `${Key}` tokens: `(start, key, end)` byte offsets into `text`.
///
/// Keys are non-empty runs of ASCII letters, digits and underscores;
/// anything else between `${` and `}` is not a token.
fn tokens(text: &str) -> Vec<(usize, &str, usize)> {
    let mut found = Vec::new();
    let mut offset = 0;

    while let Some(pos) = text[offset..].find("${") {
        let start = offset + pos;
        let key_start = start + 2;
        let rest = &text[key_start..];
        let key_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());

        if key_len > 0 && rest[key_len..].starts_with('}') {
            let end = key_start + key_len + 1;
            found.push((start, &rest[..key_len], end));
            offset = end;
        } else {
            offset = key_start;
        }
    }

    found
}
