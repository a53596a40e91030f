//! Naming convention settings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Naming convention used to derive field and property names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NamingStrategyKind {
    #[default]
    CamelCase,
    PascalCase,
    Hungarian,
}

impl NamingStrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStrategyKind::CamelCase => "camel-case",
            NamingStrategyKind::PascalCase => "pascal-case",
            NamingStrategyKind::Hungarian => "hungarian",
        }
    }
}

impl fmt::Display for NamingStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NamingStrategyKind {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "camelcase" | "camel" => Ok(NamingStrategyKind::CamelCase),
            "pascalcase" | "pascal" => Ok(NamingStrategyKind::PascalCase),
            "hungarian" => Ok(NamingStrategyKind::Hungarian),
            _ => Err(Error::unknown_strategy(s)),
        }
    }
}

impl TryFrom<String> for NamingStrategyKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map_err(|e: Box<Error>| e.to_string())
    }
}

impl From<NamingStrategyKind> for String {
    fn from(kind: NamingStrategyKind) -> Self {
        kind.as_str().to_string()
    }
}

/// `[naming]` section of `autobind.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub strategy: NamingStrategyKind,
    /// Prepended to every generated field name.
    pub field_prefix: String,
    /// Prepended to Hungarian property names.
    pub property_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            strategy: NamingStrategyKind::CamelCase,
            field_prefix: "_".to_string(),
            property_prefix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_spellings() {
        for text in ["camel-case", "CamelCase", "camel_case", "camel"] {
            assert_eq!(
                text.parse::<NamingStrategyKind>().unwrap(),
                NamingStrategyKind::CamelCase
            );
        }
        assert_eq!(
            "Pascal-Case".parse::<NamingStrategyKind>().unwrap(),
            NamingStrategyKind::PascalCase
        );
        assert_eq!(
            "HUNGARIAN".parse::<NamingStrategyKind>().unwrap(),
            NamingStrategyKind::Hungarian
        );
    }

    #[test]
    fn test_unknown_strategy() {
        let err = "snake".parse::<NamingStrategyKind>().unwrap_err();
        assert!(matches!(*err, Error::UnknownStrategy { ref name } if name == "snake"));
    }

    #[test]
    fn test_defaults() {
        let config = NamingConfig::default();
        assert_eq!(config.strategy, NamingStrategyKind::CamelCase);
        assert_eq!(config.field_prefix, "_");
        assert_eq!(config.property_prefix, "");
    }

    #[test]
    fn test_deserialize_partial_section() {
        let config: NamingConfig = toml::from_str(r#"strategy = "hungarian""#).unwrap();
        assert_eq!(config.strategy, NamingStrategyKind::Hungarian);
        assert_eq!(config.field_prefix, "_");
    }

    #[test]
    fn test_deserialize_unknown_strategy_fails() {
        let err = toml::from_str::<NamingConfig>(r#"strategy = "kebab""#).unwrap_err();
        assert!(err.message().contains("unknown naming strategy 'kebab'"));
    }
}
