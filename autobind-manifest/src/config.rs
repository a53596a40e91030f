//! `autobind.toml` schema and parsing.

use std::{collections::HashMap, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Language, NamingConfig, Result, SourceContext,
    validate::{find_quoted_span, find_quoted_spans},
};

/// Config written by `autobind init`.
pub const DEFAULT_CONFIG: &str = r#"[paths]
base_output = "Assets/Scripts"
template_base = "Templates"

[naming]
strategy = "camel-case"
field_prefix = "_"
property_prefix = ""

[[languages]]
id = "C#"
file_extension = ".cs"
template = "CSharpBinding.txt"
output = "Scripts/UI/Generated"
namespace = "Game.UI"
additional_namespaces = ["UnityEngine", "UnityEngine.UI"]

[[languages]]
id = "Lua"
file_extension = ".lua"
template = "LuaBinding.txt"
output = "LuaScripts/UI/Generated"
"#;

/// `[paths]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root all language output directories are resolved against.
    pub base_output: String,
    /// Directory templates are loaded from.
    pub template_base: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_output: "Assets/Scripts".to_string(),
            template_base: "Templates".to_string(),
        }
    }
}

/// One `[[languages]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language id, matched case-insensitively (`C#`, `Lua`).
    pub id: String,
    pub file_extension: String,
    /// Template file name, relative to `paths.template_base`.
    pub template: String,
    /// Output directory, relative to `paths.base_output`.
    pub output: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub additional_namespaces: Vec<String>,
}

impl LanguageConfig {
    /// Resolve the generator variant for this entry.
    pub fn language(&self) -> Result<Language> {
        Language::from_str(&self.id).map_err(|_| Error::unknown_language(&self.id))
    }

    /// Returns true if `id` names this entry, either literally
    /// (case-insensitive) or through a language alias (`cs` for `C#`).
    pub fn matches(&self, id: &str) -> bool {
        if self.id.trim().eq_ignore_ascii_case(id.trim()) {
            return true;
        }
        match (Language::from_str(&self.id), Language::from_str(id)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Key used for uniqueness checks.
    fn key(&self) -> String {
        match self.language() {
            Ok(language) => language.as_str().to_lowercase(),
            Err(_) => self.id.trim().to_lowercase(),
        }
    }
}

/// Root schema for `autobind.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            naming: NamingConfig::default(),
            languages: vec![
                LanguageConfig {
                    id: "C#".to_string(),
                    file_extension: ".cs".to_string(),
                    template: "CSharpBinding.txt".to_string(),
                    output: "Scripts/UI/Generated".to_string(),
                    namespace: "Game.UI".to_string(),
                    additional_namespaces: vec![
                        "UnityEngine".to_string(),
                        "UnityEngine.UI".to_string(),
                    ],
                },
                LanguageConfig {
                    id: "Lua".to_string(),
                    file_extension: ".lua".to_string(),
                    template: "LuaBinding.txt".to_string(),
                    output: "LuaScripts/UI/Generated".to_string(),
                    namespace: String::new(),
                    additional_namespaces: Vec::new(),
                },
            ],
        }
    }
}

impl FromStr for GeneratorConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "autobind.toml")
    }
}

impl GeneratorConfig {
    /// Parse `autobind.toml` from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }

    /// Find a language entry by id (case-insensitive).
    pub fn language(&self, id: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|l| l.matches(id))
    }
}

fn parse_config(content: &str, filename: &str) -> Result<GeneratorConfig> {
    let ctx = SourceContext::new(content, filename);
    let config: GeneratorConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn validate_config(config: &GeneratorConfig, ctx: &SourceContext) -> Result<()> {
    // normalized key -> id as first written
    let mut seen: HashMap<String, &str> = HashMap::new();

    for language in &config.languages {
        if language.id.trim().is_empty() {
            return Err(ctx.validation_error("language id cannot be empty"));
        }

        let key = language.key();
        if let Some(first) = seen.get(&key) {
            let first_span = find_quoted_span(ctx.src(), first, 0);
            let second_span = if *first == language.id {
                find_quoted_span(ctx.src(), &language.id, 1)
            } else {
                find_quoted_spans(ctx.src(), &language.id).into_iter().next()
            };

            return match (first_span, second_span) {
                (Some(first_span), Some(second_span)) => Err(ctx.duplicate_language_error(
                    &language.id,
                    first_span,
                    second_span,
                )),
                _ => Err(ctx.validation_error(format!("duplicate language '{}'", language.id))),
            };
        }
        seen.insert(key, &language.id);
    }

    Ok(())
}
