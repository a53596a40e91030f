//! Check operation - bindings and template validation.

use std::path::Path;

use autobind_codegen::{
    GeneratorContext, NamingEngine, Template,
    pipeline::{CompilationContext, Pipeline},
};
use autobind_core::FileStore;
use autobind_manifest::{BindingsFile, GeneratorConfig, LanguageConfig};
use eyre::Result;

use crate::{
    language::LanguageSupport,
    reports::{CheckReport, TemplateCheck},
};

/// Execute the check operation.
///
/// Lint errors end up in the report rather than failing the operation.
pub fn check(
    config: &GeneratorConfig,
    root: &Path,
    bindings: &BindingsFile,
    class_name: Option<&str>,
    store: &dyn FileStore,
) -> Result<CheckReport> {
    let naming = NamingEngine::new(config.naming.clone()).strategy();
    let class_name = class_name
        .map(str::to_string)
        .unwrap_or_else(|| bindings.class_name());

    let mut ctx =
        CompilationContext::new(bindings.manifest().clone(), class_name.clone(), naming.clone());
    if let Err(err) = Pipeline::new().run_context(&mut ctx) {
        if !ctx.has_errors() {
            return Err(err.wrap_err("Pipeline failed"));
        }
    }

    let templates = config
        .languages
        .iter()
        .map(|language| {
            let gen_ctx = GeneratorContext::new(
                language.clone(),
                config.paths.clone(),
                naming.clone(),
            )
            .with_root(root);
            check_template(language, gen_ctx, store)
        })
        .collect();

    Ok(CheckReport {
        bindings_path: bindings.path().to_path_buf(),
        class_name,
        diagnostics: ctx.diagnostics,
        templates,
    })
}

fn check_template(
    language: &LanguageConfig,
    ctx: GeneratorContext,
    store: &dyn FileStore,
) -> TemplateCheck {
    let template_path = ctx.template_path();
    let mut check = TemplateCheck {
        language: language.id.clone(),
        template: template_path.clone(),
        declared: Vec::new(),
        unsupplied: Vec::new(),
        unused: Vec::new(),
        error: None,
    };

    let supplied = match LanguageSupport::for_config(language) {
        Ok(support) => support.generator(ctx).supplied_placeholders(),
        Err(err) => {
            check.error = Some(format!("{:#}", err));
            return check;
        }
    };
    let template = match Template::load(&template_path, store) {
        Ok(template) => template,
        Err(err) => {
            check.error = Some(format!("{:#}", err));
            return check;
        }
    };

    check.declared = template.placeholders();
    check.unsupplied = check
        .declared
        .iter()
        .filter(|name| !supplied.contains(&name.as_str()))
        .cloned()
        .collect();
    check.unused = supplied
        .iter()
        .filter(|name| !check.declared.iter().any(|d| d == *name))
        .map(|name| name.to_string())
        .collect();
    check
}
