//! Unified language dispatch.
//!
//! Centralizes language-specific generator creation and default templates.

use autobind_codegen::{BindingCodegen, GeneratorContext};
use autobind_codegen_csharp::{CSharpTemplate, Generator as CSharpGenerator};
use autobind_codegen_lua::{Generator as LuaGenerator, LuaTemplate};
use autobind_core::GeneratedFile;
use autobind_manifest::{Language, LanguageConfig};
use eyre::Result;

/// Language-specific support for binding generation.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    pub fn get(language: Language) -> Self {
        Self { language }
    }

    /// Support for a configured language, failing on ids no generator exists for.
    pub fn for_config(config: &LanguageConfig) -> Result<Self> {
        Ok(Self::get(config.language()?))
    }

    /// Create a generator for this language.
    pub fn generator(&self, ctx: GeneratorContext) -> Box<dyn BindingCodegen> {
        match self.language {
            Language::CSharp => Box::new(CSharpGenerator::new(ctx)),
            Language::Lua => Box::new(LuaGenerator::new(ctx)),
        }
    }

    /// The default template, written under `file_name`.
    pub fn default_template(&self, file_name: &str) -> Box<dyn GeneratedFile> {
        match self.language {
            Language::CSharp => Box::new(CSharpTemplate::new(file_name)),
            Language::Lua => Box::new(LuaTemplate::new(file_name)),
        }
    }
}
