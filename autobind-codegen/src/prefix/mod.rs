//! Hungarian type-prefix resolution.
//!
//! [`TypePrefixResolver::prefix`] maps any [`TypeInfo`] to a short tag such as
//! `txt` for `Text` or `arrn` for `int[]`. Resolution order, first match wins:
//!
//! 1. primitive keywords (`int` -> `n`)
//! 2. arrays (`arr` + element prefix)
//! 3. generic containers by definition (`List<T>` -> `lst`)
//! 4. known engine components by display name
//! 5. a prefix derived from the type name itself

mod tables;

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use autobind_core::split_words;
use autobind_ir::{TypeInfo, TypeKind};
use tracing::trace;

use self::tables::{COLLECTIONS, COMPONENTS, PRIMITIVE_ALIASES, PRIMITIVES, SUFFIXES, lookup};

/// Memoizing type-prefix resolver.
///
/// Resolution is deterministic, so the cache only saves work: results are the
/// same before and after [`clear_cache`](Self::clear_cache).
#[derive(Debug, Default)]
pub struct TypePrefixResolver {
    cache: Mutex<HashMap<TypeInfo, String>>,
}

impl TypePrefixResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix for `ty`, computed once per distinct type.
    pub fn prefix(&self, ty: &TypeInfo) -> String {
        let cached = self.cache().get(ty).cloned();
        if let Some(prefix) = cached {
            return prefix;
        }

        let prefix = self.resolve(ty);
        trace!(ty = %ty.full_name, prefix = %prefix, "resolved type prefix");
        self.cache().insert(ty.clone(), prefix.clone());
        prefix
    }

    pub fn clear_cache(&self) {
        self.cache().clear();
    }

    /// Number of memoized types.
    pub fn cached_len(&self) -> usize {
        self.cache().len()
    }

    // A poisoned cache still holds valid entries.
    fn cache(&self) -> MutexGuard<'_, HashMap<TypeInfo, String>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn resolve(&self, ty: &TypeInfo) -> String {
        if let Some(prefix) = primitive_prefix(ty) {
            return prefix.to_string();
        }

        match &ty.kind {
            TypeKind::Array(element) => return format!("arr{}", self.prefix(element)),
            TypeKind::Generic { definition, .. } => {
                if let Some(prefix) = lookup(COLLECTIONS, definition) {
                    return prefix.to_string();
                }
            }
            TypeKind::Node | TypeKind::Component | TypeKind::Value => {}
        }

        if let Some(prefix) = lookup(COMPONENTS, &ty.name) {
            return prefix.to_string();
        }

        custom_prefix(&ty.name)
    }
}

fn primitive_prefix(ty: &TypeInfo) -> Option<&'static str> {
    if matches!(ty.kind, TypeKind::Array(_) | TypeKind::Generic { .. }) {
        return None;
    }

    lookup(PRIMITIVES, &ty.full_name).or_else(|| {
        let keyword = lookup(PRIMITIVE_ALIASES, &ty.full_name)?;
        lookup(PRIMITIVES, keyword)
    })
}

/// Derive a prefix from a type name with no table entry.
///
/// One word yields its first three characters, several words yield their
/// initials; both lower-cased. `PlayerHealthController` gives `ph`.
pub fn custom_prefix(type_name: &str) -> String {
    // Generic display names carry their arguments; only the definition counts.
    let base = type_name.split('<').next().unwrap_or(type_name);
    let base = strip_suffix(base);
    let words = split_words(base);

    match words.as_slice() {
        [] => String::new(),
        [word] => word.chars().take(3).collect::<String>().to_lowercase(),
        words => words
            .iter()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_lowercase)
            .collect(),
    }
}

fn strip_suffix(name: &str) -> &str {
    SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}
