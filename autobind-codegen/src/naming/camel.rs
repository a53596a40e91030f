use autobind_core::{add_prefix, capitalize, lowercase_first};
use autobind_ir::TypeInfo;

use super::{NamingStrategy, NamingStrategyKind};

/// `ScoreText` -> field `_scoreText`, property `ScoreText`.
#[derive(Debug, Clone)]
pub struct CamelCase {
    field_prefix: String,
}

impl CamelCase {
    pub fn new(field_prefix: impl Into<String>) -> Self {
        Self {
            field_prefix: field_prefix.into(),
        }
    }
}

impl NamingStrategy for CamelCase {
    fn kind(&self) -> NamingStrategyKind {
        NamingStrategyKind::CamelCase
    }

    fn field_name(&self, original: &str, _ty: &TypeInfo) -> String {
        add_prefix(&lowercase_first(original), &self.field_prefix)
    }

    fn property_name(&self, field: &str) -> String {
        let name = if self.field_prefix.is_empty() {
            field
        } else {
            field.strip_prefix(&self.field_prefix).unwrap_or(field)
        };
        capitalize(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_and_property() {
        let naming = CamelCase::new("_");
        let field = naming.field_name("ScoreText", &TypeInfo::component("UnityEngine.UI.Text"));

        assert_eq!(field, "_scoreText");
        assert_eq!(naming.property_name(&field), "ScoreText");
    }

    #[test]
    fn test_property_keeps_foreign_prefix() {
        let naming = CamelCase::new("m_");
        assert_eq!(naming.property_name("score"), "Score");
        assert_eq!(naming.property_name("_score"), "_score");
    }

    #[test]
    fn test_empty_name_falls_back_to_prefix() {
        let naming = CamelCase::new("_");
        assert_eq!(naming.field_name("", &TypeInfo::node()), "_");
        assert_eq!(naming.property_name("_"), "");
    }
}
