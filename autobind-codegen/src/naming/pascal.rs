use autobind_core::{add_prefix, capitalize};
use autobind_ir::TypeInfo;

use super::{NamingStrategy, NamingStrategyKind};

/// `scoreText` -> field `_ScoreText`; the property reuses the field name.
#[derive(Debug, Clone)]
pub struct PascalCase {
    field_prefix: String,
}

impl PascalCase {
    pub fn new(field_prefix: impl Into<String>) -> Self {
        Self {
            field_prefix: field_prefix.into(),
        }
    }
}

impl NamingStrategy for PascalCase {
    fn kind(&self) -> NamingStrategyKind {
        NamingStrategyKind::PascalCase
    }

    fn field_name(&self, original: &str, _ty: &TypeInfo) -> String {
        add_prefix(&capitalize(original), &self.field_prefix)
    }

    fn property_name(&self, field: &str) -> String {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_and_property() {
        let naming = PascalCase::new("_");
        let field = naming.field_name("scoreText", &TypeInfo::node());

        assert_eq!(field, "_ScoreText");
        assert_eq!(naming.property_name(&field), "_ScoreText");
    }

    #[test]
    fn test_no_prefix() {
        let naming = PascalCase::new("");
        assert_eq!(naming.field_name("title", &TypeInfo::node()), "Title");
        assert_eq!(naming.field_name("", &TypeInfo::node()), "");
    }
}
