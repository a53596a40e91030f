//! Add operation - appending a binding to a bindings file.

use autobind_codegen::{NamingStrategy, pipeline::phases::lower_entry};
use autobind_ir::{BindingSet, ObjectRef};
use autobind_manifest::{BindingEntry, BindingsFile};
use eyre::{Result, WrapErr, bail};

/// A validated binding ready to be appended.
#[derive(Debug)]
pub struct AddPlan {
    pub entry: BindingEntry,
    /// Effective name: explicit, or suggested by the naming strategy.
    pub name: String,
    /// Index and name of an existing binding targeting the same thing.
    pub duplicate_of: Option<(usize, String)>,
}

/// Check a new binding against the file without modifying it.
///
/// Name clashes are errors. A duplicate target is only reported in the
/// plan so the caller can ask before adding it.
pub fn plan_add(
    file: &BindingsFile,
    naming: &dyn NamingStrategy,
    object: &str,
    ty: Option<&str>,
    name: Option<&str>,
) -> Result<AddPlan> {
    let object = object.trim();
    if object.is_empty() {
        bail!("object path must not be empty");
    }
    if name.is_some_and(|n| n.trim().is_empty()) {
        bail!("binding name must not be empty");
    }

    let entry = BindingEntry {
        name: name.map(str::to_string),
        object: Some(ObjectRef::new(object)),
        ty: ty.map(str::to_string),
    };
    let existing = file
        .manifest()
        .bindings
        .iter()
        .enumerate()
        .map(|(index, entry)| lower_entry(index, entry, naming))
        .collect::<Result<BindingSet>>()?;

    let candidate = lower_entry(existing.len(), &entry, naming)
        .wrap_err_with(|| format!("invalid type '{}'", ty.unwrap_or("")))?;

    if existing.get(&candidate.name).is_some() {
        bail!("Binding '{}' already exists", candidate.name);
    }

    let duplicate_of = existing
        .find_duplicate(&candidate, None)
        .map(|index| (index, existing.as_slice()[index].name.clone()));

    Ok(AddPlan {
        entry,
        name: candidate.name,
        duplicate_of,
    })
}
