//! Target languages for binding generation.

use std::{fmt, str::FromStr};

/// Supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C# host-language bindings
    CSharp,
    /// Lua scripting bindings (xLua-style `CS.` type access)
    Lua,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::CSharp, Language::Lua];

    /// Returns the canonical language id as written in `autobind.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::CSharp => "C#",
            Language::Lua => "Lua",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c#" | "csharp" | "cs" => Ok(Language::CSharp),
            "lua" => Ok(Language::Lua),
            _ => Err(format!("unknown language '{}', expected 'C#' or 'Lua'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Language::from_str("C#").unwrap(), Language::CSharp);
        assert_eq!(Language::from_str("c#").unwrap(), Language::CSharp);
        assert_eq!(Language::from_str("CSharp").unwrap(), Language::CSharp);
        assert_eq!(Language::from_str("cs").unwrap(), Language::CSharp);
        assert_eq!(Language::from_str("LUA").unwrap(), Language::Lua);
        assert!(Language::from_str("python").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for language in Language::ALL {
            assert_eq!(language.to_string().parse::<Language>().unwrap(), language);
        }
    }
}
