//! Type descriptors attached to bindings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display name of the container object type.
const NODE_NAME: &str = "GameObject";
/// Fully-qualified name of the container object type.
const NODE_FULL_NAME: &str = "UnityEngine.GameObject";

/// Built-in value type keywords recognized when parsing type text.
const VALUE_KEYWORDS: &[&str] = &[
    "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "long", "ulong",
    "short", "ushort", "string", "object",
];

/// Shape of a described type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// The container object (scene node) itself.
    Node,
    /// A capability attached to a node.
    Component,
    /// A plain value type (primitive or user type that is not a component).
    Value,
    /// Array of an element type.
    Array(Box<TypeInfo>),
    /// Instantiated generic type, e.g. `List<int>`.
    Generic {
        /// Unqualified definition name (`List`, `Dictionary`, ...).
        definition: String,
        args: Vec<TypeInfo>,
    },
}

/// Describes a binding's declared type for code generation.
///
/// Carries both the short display name used in host-language declarations and
/// the fully-qualified name required by scripting interop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Short display name (e.g., "Text").
    pub name: String,
    /// Fully-qualified name (e.g., "UnityEngine.UI.Text").
    pub full_name: String,
    pub kind: TypeKind,
}

impl TypeInfo {
    /// The container object type.
    pub fn node() -> Self {
        Self {
            name: NODE_NAME.to_string(),
            full_name: NODE_FULL_NAME.to_string(),
            kind: TypeKind::Node,
        }
    }

    /// A component type from its fully-qualified name.
    ///
    /// The display name is the last `.`-separated segment.
    pub fn component(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        Self {
            name: short_name(&full_name).to_string(),
            full_name,
            kind: TypeKind::Component,
        }
    }

    /// A plain value type.
    pub fn value(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        Self {
            name: short_name(&full_name).to_string(),
            full_name,
            kind: TypeKind::Value,
        }
    }

    /// An array of `element`.
    pub fn array(element: TypeInfo) -> Self {
        Self {
            name: format!("{}[]", element.name),
            full_name: format!("{}[]", element.full_name),
            kind: TypeKind::Array(Box::new(element)),
        }
    }

    /// An instantiated generic type.
    pub fn generic(definition: impl Into<String>, args: Vec<TypeInfo>) -> Self {
        let definition = definition.into();
        let short = short_name(&definition).to_string();
        let names: Vec<&str> = args.iter().map(|a| a.name.as_str()).collect();
        let full_names: Vec<&str> = args.iter().map(|a| a.full_name.as_str()).collect();

        Self {
            name: format!("{}<{}>", short, names.join(", ")),
            full_name: format!("{}<{}>", definition, full_names.join(", ")),
            kind: TypeKind::Generic {
                definition: short,
                args,
            },
        }
    }

    /// Returns true if this describes the container object itself.
    pub fn is_node(&self) -> bool {
        matches!(self.kind, TypeKind::Node)
    }

    /// Name used when referencing the type from generated code.
    pub fn type_ref(&self, qualified: bool) -> &str {
        if qualified {
            &self.full_name
        } else {
            &self.name
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Error returned when type text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTypeError {
    #[error("type name is empty")]
    Empty,
    #[error("unbalanced generic brackets in '{0}'")]
    Unbalanced(String),
}

impl FromStr for TypeInfo {
    type Err = ParseTypeError;

    /// Parse type text such as `UnityEngine.UI.Text`, `int[]` or
    /// `Dictionary<string, List<int>>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseTypeError::Empty);
        }

        if let Some(element) = s.strip_suffix("[]") {
            return Ok(TypeInfo::array(element.parse()?));
        }

        if let Some(open) = s.find('<') {
            let inner = s[open + 1..]
                .strip_suffix('>')
                .ok_or_else(|| ParseTypeError::Unbalanced(s.to_string()))?;
            let args = split_type_args(inner)
                .ok_or_else(|| ParseTypeError::Unbalanced(s.to_string()))?
                .into_iter()
                .map(str::parse)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(TypeInfo::generic(s[..open].trim(), args));
        }

        if s.contains('>') {
            return Err(ParseTypeError::Unbalanced(s.to_string()));
        }

        let short = short_name(s);
        if short == NODE_NAME {
            Ok(TypeInfo::node())
        } else if VALUE_KEYWORDS.contains(&s) {
            Ok(TypeInfo::value(s))
        } else {
            Ok(TypeInfo::component(s))
        }
    }
}

fn short_name(full_name: &str) -> &str {
    full_name.rsplit('.').next().unwrap_or(full_name)
}

/// Split generic arguments on top-level commas.
fn split_type_args(inner: &str) -> Option<Vec<&str>> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                args.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    args.push(inner[start..].trim());
    Some(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_short_name() {
        let ty = TypeInfo::component("UnityEngine.UI.Text");
        assert_eq!(ty.name, "Text");
        assert_eq!(ty.full_name, "UnityEngine.UI.Text");
        assert_eq!(ty.type_ref(false), "Text");
        assert_eq!(ty.type_ref(true), "UnityEngine.UI.Text");
    }

    #[test]
    fn test_parse_node() {
        assert_eq!("GameObject".parse::<TypeInfo>().unwrap(), TypeInfo::node());
        assert_eq!(
            "UnityEngine.GameObject".parse::<TypeInfo>().unwrap(),
            TypeInfo::node()
        );
    }

    #[test]
    fn test_parse_value_keyword() {
        let ty: TypeInfo = "int".parse().unwrap();
        assert_eq!(ty.kind, TypeKind::Value);
        assert_eq!(ty.name, "int");
    }

    #[test]
    fn test_parse_nested_array() {
        let ty: TypeInfo = "int[][]".parse().unwrap();
        assert_eq!(ty.name, "int[][]");
        let TypeKind::Array(inner) = &ty.kind else {
            panic!("expected array");
        };
        assert!(matches!(inner.kind, TypeKind::Array(_)));
    }

    #[test]
    fn test_parse_nested_generic() {
        let ty: TypeInfo = "System.Collections.Generic.Dictionary<string, List<int>>"
            .parse()
            .unwrap();
        assert_eq!(ty.name, "Dictionary<string, List<int>>");
        let TypeKind::Generic { definition, args } = &ty.kind else {
            panic!("expected generic");
        };
        assert_eq!(definition, "Dictionary");
        assert_eq!(args.len(), 2);
        assert_eq!(args[1].name, "List<int>");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<TypeInfo>(), Err(ParseTypeError::Empty));
        assert!(matches!(
            "List<int".parse::<TypeInfo>(),
            Err(ParseTypeError::Unbalanced(_))
        ));
        assert!(matches!(
            "List<int>>".parse::<TypeInfo>(),
            Err(ParseTypeError::Unbalanced(_))
        ));
    }
}
