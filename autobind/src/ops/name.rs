//! Name operation - preview of generated names.

use std::sync::Arc;

use autobind_codegen::{NamingEngine, TypePrefixResolver};
use autobind_ir::TypeInfo;
use autobind_manifest::NamingConfig;
use eyre::{Result, WrapErr};

use crate::reports::NameReport;

/// Field name, property name and type prefix for `original` under `naming`.
///
/// No type means the node itself.
pub fn name(original: &str, ty: Option<&str>, naming: NamingConfig) -> Result<NameReport> {
    let type_info = match ty {
        Some(text) => text
            .parse::<TypeInfo>()
            .wrap_err_with(|| format!("invalid type '{}'", text))?,
        None => TypeInfo::node(),
    };

    let resolver = Arc::new(TypePrefixResolver::new());
    let engine = NamingEngine::with_resolver(naming, resolver.clone());
    let field = engine.field_name(original, &type_info);
    let property = engine.property_name(&field);

    Ok(NameReport {
        strategy: engine.config().strategy,
        type_name: type_info.full_name.clone(),
        property,
        field,
        prefix: resolver.prefix(&type_info),
    })
}
