//! Lower phase - resolves bindings file entries into a `BindingSet`.

use autobind_ir::{Binding, BindingSet, ObjectRef, TypeInfo};
use autobind_manifest::BindingEntry;
use eyre::{Result, WrapErr};

use crate::{
    NamingStrategy,
    pipeline::{CompilationContext, Phase},
};

/// Phase that turns each `[[bindings]]` entry into a [`Binding`].
///
/// Unnamed entries get a name suggested by the naming strategy from the
/// object's node name, or from their index when there is no object.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Resolve binding names and types"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let bindings = ctx
            .manifest
            .bindings
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                lower_entry(index, entry, ctx.naming.as_ref())
                    .wrap_err_with(|| format!("failed to lower bindings[{}]", index))
            })
            .collect::<Result<BindingSet>>()?;

        ctx.bindings = Some(bindings);
        Ok(())
    }
}

/// The name the entry at `index` is generated under: the explicit name, or
/// one suggested from the object's node name.
///
/// Without a usable node name the suggestion is built from `binding{index}`,
/// so unnamed entries never share a name.
pub fn binding_name(
    index: usize,
    entry: &BindingEntry,
    ty: &TypeInfo,
    naming: &dyn NamingStrategy,
) -> String {
    if let Some(name) = &entry.name {
        return name.clone();
    }
    let original = entry
        .object
        .as_ref()
        .map(ObjectRef::node_name)
        .filter(|node| !node.is_empty())
        .map_or_else(|| format!("binding{}", index), str::to_string);
    naming.field_name(&original, ty)
}

/// Resolve the entry at `index`.
pub fn lower_entry(
    index: usize,
    entry: &BindingEntry,
    naming: &dyn NamingStrategy,
) -> Result<Binding> {
    let ty = entry.type_info()?;
    Ok(Binding {
        name: binding_name(index, entry, &ty, naming),
        object: entry.object.clone(),
        ty,
    })
}
