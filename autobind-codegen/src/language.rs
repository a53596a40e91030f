//! Language-agnostic binding generation trait.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use autobind_core::{File, FileStore, WriteResult};
use autobind_ir::{Binding, BindingSet, ObjectRef};
use autobind_manifest::{Language, LanguageConfig, PathsConfig};
use eyre::{Result, WrapErr};
use tracing::{debug, warn};

use crate::{NamingStrategy, Placeholders, Template};

/// Everything one generator needs from the configuration.
#[derive(Clone)]
pub struct GeneratorContext {
    pub language: LanguageConfig,
    pub paths: PathsConfig,
    pub naming: Arc<dyn NamingStrategy>,
    /// Directory `paths` are resolved against (the `autobind.toml` location).
    pub root: PathBuf,
}

impl GeneratorContext {
    pub fn new(
        language: LanguageConfig,
        paths: PathsConfig,
        naming: Arc<dyn NamingStrategy>,
    ) -> Self {
        Self {
            language,
            paths,
            naming,
            root: PathBuf::new(),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// File extension with a leading dot.
    pub fn file_extension(&self) -> String {
        let ext = self.language.file_extension.trim();
        if ext.is_empty() || ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{}", ext)
        }
    }

    /// `{root}/{template_base}/{template}`
    pub fn template_path(&self) -> PathBuf {
        self.root
            .join(&self.paths.template_base)
            .join(&self.language.template)
    }

    /// `{root}/{base_output}/{output}/{class}.Bindings{ext}`
    pub fn output_path(&self, class_name: &str) -> PathBuf {
        self.root
            .join(&self.paths.base_output)
            .join(&self.language.output)
            .join(format!("{}.Bindings{}", class_name, self.file_extension()))
    }
}

/// The result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub language: Language,
    pub path: PathBuf,
    pub content: String,
    /// `None` when the artifact was only previewed.
    pub written: Option<WriteResult>,
}

/// Bindings that take part in generation, in order.
///
/// Bindings without a target object are skipped and logged.
pub fn present_bindings(bindings: &BindingSet) -> impl Iterator<Item = (&Binding, &ObjectRef)> {
    bindings.iter().filter_map(|binding| match &binding.object {
        Some(object) => Some((binding, object)),
        None => {
            warn!(name = %binding.name, "skipping binding with missing object");
            None
        }
    })
}

/// Trait for language-specific binding generators.
///
/// Implementors supply the per-language placeholder values; loading the
/// template, rendering and writing are shared.
pub trait BindingCodegen {
    fn language(&self) -> Language;

    fn context(&self) -> &GeneratorContext;

    /// Placeholder values for `class_name` and `bindings`. Pure.
    fn placeholders(&self, class_name: &str, bindings: &BindingSet) -> Placeholders;

    /// Placeholder names this generator always supplies.
    fn supplied_placeholders(&self) -> &'static [&'static str];

    fn file_extension(&self) -> String {
        self.context().file_extension()
    }

    fn template_path(&self) -> PathBuf {
        self.context().template_path()
    }

    fn output_path(&self, class_name: &str) -> PathBuf {
        self.context().output_path(class_name)
    }

    /// Render `template` for the given bindings.
    fn render(&self, template: &Template, class_name: &str, bindings: &BindingSet) -> String {
        template.render(&self.placeholders(class_name, bindings))
    }

    /// Load the template and render it without writing anything.
    fn preview(
        &self,
        class_name: &str,
        bindings: &BindingSet,
        output_path: &Path,
        store: &dyn FileStore,
    ) -> Result<GeneratedArtifact> {
        let template_path = self.template_path();
        let template = Template::load(&template_path, store)?;
        let content = self.render(&template, class_name, bindings);

        Ok(GeneratedArtifact {
            language: self.language(),
            path: output_path.to_path_buf(),
            content,
            written: None,
        })
    }

    /// Load the template, render it and write the result to `output_path`,
    /// replacing any existing file.
    fn generate(
        &self,
        class_name: &str,
        bindings: &BindingSet,
        output_path: &Path,
        store: &dyn FileStore,
    ) -> Result<GeneratedArtifact> {
        debug!(
            language = %self.language(),
            class = class_name,
            bindings = bindings.len(),
            "generating bindings"
        );

        let mut artifact = self.preview(class_name, bindings, output_path, store)?;
        let written = File::new(&artifact.path, artifact.content.as_str())
            .write(store)
            .wrap_err_with(|| {
                format!(
                    "failed to write {} bindings to '{}'",
                    self.language(),
                    artifact.path.display()
                )
            })?;

        debug!(path = %artifact.path.display(), "bindings written");
        artifact.written = Some(written);
        Ok(artifact)
    }
}
