use std::sync::Arc;

use autobind_core::{add_prefix, capitalize, drop_chars};
use autobind_ir::TypeInfo;

use super::{NamingStrategy, NamingStrategyKind};
use crate::TypePrefixResolver;

/// Number of characters treated as the type prefix when deriving a property.
///
/// Fixed regardless of the actual prefix length: `_txtScore` yields `Score`,
/// but `_bFlag` yields `Ag`.
const PROPERTY_PREFIX_WIDTH: usize = 3;

/// Embeds a type tag: `scoreText` on `Text` -> `_txtScoreText`.
#[derive(Debug, Clone)]
pub struct Hungarian {
    field_prefix: String,
    property_prefix: String,
    resolver: Arc<TypePrefixResolver>,
}

impl Hungarian {
    pub fn new(
        field_prefix: impl Into<String>,
        property_prefix: impl Into<String>,
        resolver: Arc<TypePrefixResolver>,
    ) -> Self {
        Self {
            field_prefix: field_prefix.into(),
            property_prefix: property_prefix.into(),
            resolver,
        }
    }
}

impl NamingStrategy for Hungarian {
    fn kind(&self) -> NamingStrategyKind {
        NamingStrategyKind::Hungarian
    }

    fn field_name(&self, original: &str, ty: &TypeInfo) -> String {
        let prefix = format!("{}{}", self.field_prefix, self.resolver.prefix(ty));
        add_prefix(&capitalize(original), &prefix)
    }

    fn property_name(&self, field: &str) -> String {
        let mut name = if self.field_prefix.is_empty() {
            field.to_string()
        } else {
            field
                .strip_prefix(&self.field_prefix)
                .unwrap_or(field)
                .to_string()
        };

        if name.chars().count() > PROPERTY_PREFIX_WIDTH {
            name = capitalize(&drop_chars(&name, PROPERTY_PREFIX_WIDTH));
        }

        add_prefix(&name, &self.property_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naming(property_prefix: &str) -> Hungarian {
        Hungarian::new("_", property_prefix, Arc::new(TypePrefixResolver::new()))
    }

    #[test]
    fn test_field_name() {
        let naming = naming("");
        let text = TypeInfo::component("UnityEngine.UI.Text");

        assert_eq!(naming.field_name("scoreText", &text), "_txtScoreText");
        assert_eq!(naming.field_name("Root", &TypeInfo::node()), "_goRoot");
        assert_eq!(
            naming.field_name("health", &"PlayerHealthController".parse().unwrap()),
            "_phHealth"
        );
    }

    #[test]
    fn test_property_three_char_prefix() {
        assert_eq!(naming("").property_name("_txtScoreText"), "ScoreText");
    }

    #[test]
    fn test_property_two_char_prefix_drops_three() {
        // "go" is two characters, the rule still drops three
        assert_eq!(naming("").property_name("_goRoot"), "Oot");
    }

    #[test]
    fn test_property_long_prefix_keeps_tail() {
        // "rect" is four characters, one is left behind
        assert_eq!(naming("").property_name("_rectPanel"), "TPanel");
    }

    #[test]
    fn test_property_short_name_kept() {
        assert_eq!(naming("").property_name("_txt"), "txt");
        assert_eq!(naming("").property_name("_go"), "go");
    }

    #[test]
    fn test_property_prefix_applied() {
        assert_eq!(naming("P").property_name("_txtScore"), "PScore");
    }

    #[test]
    fn test_empty_name_is_prefix_only() {
        let naming = naming("");
        let text = TypeInfo::component("UnityEngine.UI.Text");
        assert_eq!(naming.field_name("", &text), "_txt");
    }
}
