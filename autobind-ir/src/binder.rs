//! Runtime-side name lookup consumed by generated code.
//!
//! Generated bind methods call `binder.Get<T>("name")`. [`Binder`] is the Rust
//! rendition of that contract: a name→object cache in front of the ordered
//! binding list.

use std::{any::Any, cell::RefCell, collections::HashMap, rc::Rc};

use thiserror::Error;
use tracing::error;

use crate::{BindingSet, ObjectRef};

/// Error returned by [`Binder::get`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("binding '{name}' not found")]
    NotFound { name: String },
    #[error("binding '{name}' has no target object")]
    Missing { name: String },
    #[error("binding '{name}' is not a {expected}")]
    TypeMismatch { name: String, expected: &'static str },
}

type Object = Rc<dyn Any>;

struct Entry {
    name: String,
    object: Option<Object>,
}

/// Name→object lookup with a lazily populated cache.
///
/// The cache holds at most one entry per name and is never invalidated:
/// bindings are fixed once the binder is built.
#[derive(Default)]
pub struct Binder {
    entries: Vec<Entry>,
    cache: RefCell<HashMap<String, Option<Object>>>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a binder from binding metadata, resolving each target object
    /// through `resolve`. Unresolvable or missing targets become missing
    /// entries.
    pub fn from_bindings<F>(bindings: &BindingSet, mut resolve: F) -> Self
    where
        F: FnMut(&ObjectRef) -> Option<Object>,
    {
        let entries = bindings
            .iter()
            .map(|b| Entry {
                name: b.name.clone(),
                object: b.object.as_ref().and_then(&mut resolve),
            })
            .collect();

        Self {
            entries,
            cache: RefCell::default(),
        }
    }

    /// Register an object under `name`.
    pub fn bind<T: Any>(mut self, name: impl Into<String>, object: T) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            object: Some(Rc::new(object)),
        });
        self
    }

    /// Register a name whose object is missing.
    pub fn bind_missing(mut self, name: impl Into<String>) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            object: None,
        });
        self
    }

    /// Look up `name` and downcast the bound object to `T`.
    pub fn get<T: Any>(&self, name: &str) -> Result<Rc<T>, LookupError> {
        let cached = self.cache.borrow().get(name).cloned();
        let object = match cached {
            Some(object) => object,
            None => {
                let Some(entry) = self.entries.iter().find(|e| e.name == name) else {
                    error!(name, "binding not found");
                    return Err(LookupError::NotFound {
                        name: name.to_string(),
                    });
                };
                self.cache
                    .borrow_mut()
                    .insert(name.to_string(), entry.object.clone());
                entry.object.clone()
            }
        };

        let object = object.ok_or_else(|| LookupError::Missing {
            name: name.to_string(),
        })?;

        object
            .downcast::<T>()
            .map_err(|_| LookupError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Number of names resolved so far.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}
