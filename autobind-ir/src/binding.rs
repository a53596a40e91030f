//! Bindings and the ordered binding set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TypeInfo;

/// Opaque handle to a scene object, expressed as its hierarchy path
/// (e.g., "Canvas/Header/ScoreText").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectRef(String);

impl ObjectRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Full hierarchy path.
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Name of the node itself (last path segment).
    pub fn node_name(&self) -> &str {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named association between a generated field and a target object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,
    /// Target object; `None` marks a missing binding.
    pub object: Option<ObjectRef>,
    pub ty: TypeInfo,
}

impl Binding {
    /// Bind the node itself.
    pub fn node(name: impl Into<String>, object: ObjectRef) -> Self {
        Self {
            name: name.into(),
            object: Some(object),
            ty: TypeInfo::node(),
        }
    }

    /// Bind a component attached to `object`.
    pub fn component(name: impl Into<String>, object: ObjectRef, ty: TypeInfo) -> Self {
        Self {
            name: name.into(),
            object: Some(object),
            ty,
        }
    }

    /// A binding whose target object has gone missing.
    pub fn missing(name: impl Into<String>, ty: TypeInfo) -> Self {
        Self {
            name: name.into(),
            object: None,
            ty,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.object.is_none()
    }

    /// Returns true if this binds the node rather than one of its components.
    pub fn is_node(&self) -> bool {
        self.ty.is_node()
    }

    /// Check whether two bindings target the same thing.
    pub fn is_duplicate_of(&self, other: &Binding) -> bool {
        is_duplicate(self, other)
    }
}

/// Duplicate predicate used before accepting a new or edited binding.
///
/// Two bindings are duplicates when they target the same object and either
/// both bind the node itself, or both bind a component of the same type.
/// Missing bindings never duplicate anything.
pub fn is_duplicate(a: &Binding, b: &Binding) -> bool {
    let (Some(left), Some(right)) = (&a.object, &b.object) else {
        return false;
    };
    if left != right {
        return false;
    }

    match (a.is_node(), b.is_node()) {
        (true, true) => true,
        (false, false) => a.ty == b.ty,
        _ => false,
    }
}

/// Ordered collection of bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingSet {
    bindings: Vec<Binding>,
}

impl BindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn as_slice(&self) -> &[Binding] {
        &self.bindings
    }

    /// Find a binding by exact name.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.name == name)
    }

    /// Bindings whose target object is missing, with their indices.
    pub fn missing(&self) -> impl Iterator<Item = (usize, &Binding)> {
        self.bindings
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_missing())
    }

    /// Find an existing binding that `candidate` would duplicate.
    ///
    /// `except` skips the binding being edited so it does not match itself.
    pub fn find_duplicate(&self, candidate: &Binding, except: Option<usize>) -> Option<usize> {
        self.bindings
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != except)
            .find(|(_, existing)| is_duplicate(existing, candidate))
            .map(|(i, _)| i)
    }
}

impl FromIterator<Binding> for BindingSet {
    fn from_iter<I: IntoIterator<Item = Binding>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BindingSet {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score() -> ObjectRef {
        ObjectRef::new("Canvas/ScoreText")
    }

    #[test]
    fn test_node_name() {
        assert_eq!(score().node_name(), "ScoreText");
        assert_eq!(ObjectRef::new("Root").node_name(), "Root");
        assert_eq!(ObjectRef::new("Canvas/Panel/").node_name(), "Panel");
    }

    #[test]
    fn test_two_node_bindings_are_duplicates() {
        let a = Binding::node("scoreA", score());
        let b = Binding::node("scoreB", score());
        assert!(is_duplicate(&a, &b));
    }

    #[test]
    fn test_same_component_type_is_duplicate() {
        let text = TypeInfo::component("UnityEngine.UI.Text");
        let a = Binding::component("a", score(), text.clone());
        let b = Binding::component("b", score(), text);
        assert!(a.is_duplicate_of(&b));
    }

    #[test]
    fn test_different_component_types_are_not_duplicates() {
        let a = Binding::component("a", score(), TypeInfo::component("UnityEngine.UI.Text"));
        let b = Binding::component("b", score(), TypeInfo::component("UnityEngine.UI.Image"));
        assert!(!is_duplicate(&a, &b));
    }

    #[test]
    fn test_node_and_component_are_not_duplicates() {
        let a = Binding::node("a", score());
        let b = Binding::component("b", score(), TypeInfo::component("UnityEngine.UI.Text"));
        assert!(!is_duplicate(&a, &b));
    }

    #[test]
    fn test_different_objects_are_not_duplicates() {
        let a = Binding::node("a", score());
        let b = Binding::node("b", ObjectRef::new("Canvas/Title"));
        assert!(!is_duplicate(&a, &b));
    }

    #[test]
    fn test_missing_bindings_are_never_duplicates() {
        let a = Binding::missing("a", TypeInfo::node());
        let b = Binding::missing("b", TypeInfo::node());
        assert!(!is_duplicate(&a, &b));
    }

    #[test]
    fn test_find_duplicate_skips_edited_binding() {
        let set: BindingSet = [
            Binding::node("score", score()),
            Binding::node("title", ObjectRef::new("Canvas/Title")),
        ]
        .into_iter()
        .collect();

        let edited = Binding::node("score", score());
        assert_eq!(set.find_duplicate(&edited, Some(0)), None);
        assert_eq!(set.find_duplicate(&edited, None), Some(0));
    }

    #[test]
    fn test_missing_iterator_reports_indices() {
        let set: BindingSet = [
            Binding::node("score", score()),
            Binding::missing("lost", TypeInfo::node()),
        ]
        .into_iter()
        .collect();

        let missing: Vec<usize> = set.missing().map(|(i, _)| i).collect();
        assert_eq!(missing, vec![1]);
    }
}
