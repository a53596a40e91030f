//! Generate operation - bindings file to source files.

use std::path::Path;

use autobind_codegen::{
    GeneratedArtifact, GeneratorContext, NamingEngine,
    pipeline::{CompilationContext, Pipeline},
};
use autobind_core::FileStore;
use autobind_ir::BindingSet;
use autobind_manifest::{BindingsFile, GeneratorConfig, LanguageConfig};
use eyre::Result;
use tracing::{debug, warn};

use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, LanguageOutcome, describe},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Language ids to generate; empty means every configured language.
    pub languages: &'a [String],
    /// Overrides the class name from the bindings file.
    pub class_name: Option<&'a str>,
    /// Overrides `paths.base_output`.
    pub output: Option<&'a Path>,
    /// Render without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Validation errors abort before anything is written. After that each
/// selected language is generated on its own: a failure is recorded in the
/// report and the remaining languages still run.
pub fn generate(
    config: &GeneratorConfig,
    root: &Path,
    bindings: &BindingsFile,
    opts: GenerateOptions,
    store: &dyn FileStore,
) -> Result<GenerateReport> {
    let naming = NamingEngine::new(config.naming.clone()).strategy();
    let class_name = opts
        .class_name
        .map(str::to_string)
        .unwrap_or_else(|| bindings.class_name());

    let mut ctx =
        CompilationContext::new(bindings.manifest().clone(), class_name.clone(), naming.clone());
    if let Err(err) = Pipeline::new().run_context(&mut ctx) {
        let details: Vec<String> = ctx.errors().map(describe).collect();
        return Err(err.wrap_err(format!(
            "{} has errors:\n{}",
            bindings.path().display(),
            details.join("\n")
        )));
    }

    let warnings = ctx.warnings().map(describe).collect();
    let set = ctx.take_bindings()?;

    let mut paths = config.paths.clone();
    if let Some(output) = opts.output {
        paths.base_output = output.to_string_lossy().into_owned();
    }

    let mut outcomes = Vec::new();
    for selected in select_languages(config, opts.languages) {
        let outcome = match selected {
            Ok(language) => {
                let gen_ctx = GeneratorContext::new(language.clone(), paths.clone(), naming.clone())
                    .with_root(root);
                let result =
                    generate_language(language, gen_ctx, &class_name, &set, opts.dry_run, store)
                        .map_err(|err| {
                            warn!(language = %language.id, "generation failed");
                            format!("{:#}", err)
                        });
                LanguageOutcome {
                    id: language.id.clone(),
                    result,
                }
            }
            Err(id) => LanguageOutcome {
                result: Err(format!("language '{}' is not configured", id)),
                id,
            },
        };
        outcomes.push(outcome);
    }

    Ok(GenerateReport {
        class_name,
        warnings,
        binding_count: set.len(),
        skipped: set.missing().count(),
        dry_run: opts.dry_run,
        outcomes,
    })
}

/// Configured languages matching `ids`, in the order given. Unknown ids
/// are returned as errors so they show up in the report.
fn select_languages<'a>(
    config: &'a GeneratorConfig,
    ids: &[String],
) -> Vec<Result<&'a LanguageConfig, String>> {
    if ids.is_empty() {
        return config.languages.iter().map(Ok).collect();
    }
    ids.iter()
        .map(|id| config.language(id).ok_or_else(|| id.clone()))
        .collect()
}

fn generate_language(
    language: &LanguageConfig,
    ctx: GeneratorContext,
    class_name: &str,
    bindings: &BindingSet,
    dry_run: bool,
    store: &dyn FileStore,
) -> Result<GeneratedArtifact> {
    let generator = LanguageSupport::for_config(language)?.generator(ctx);
    let output_path = generator.output_path(class_name);
    debug!(language = %language.id, path = %output_path.display(), dry_run, "generating");

    if dry_run {
        generator.preview(class_name, bindings, &output_path, store)
    } else {
        generator.generate(class_name, bindings, &output_path, store)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use autobind_codegen::testing::MemoryStore;
    use autobind_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    const BINDINGS: &str = r#"
[[bindings]]
object = "Canvas/ScoreText"
type = "UnityEngine.UI.Text"

[[bindings]]
name = "_lost"
type = "UnityEngine.UI.Button"
"#;

    fn bindings_file(dir: &TempDir, content: &str) -> BindingsFile {
        let path = dir.path().join("MainPanel.bindings.toml");
        std::fs::write(&path, content).unwrap();
        BindingsFile::open(&path).unwrap()
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_file("proj/Templates/CSharpBinding.txt", "${ClassName}\n${Fields}\n")
            .with_file("proj/Templates/LuaBinding.txt", "${ClassName}\n${Fields}\n")
    }

    fn opts(languages: &[String]) -> GenerateOptions<'_> {
        GenerateOptions {
            languages,
            class_name: None,
            output: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_generates_every_configured_language() {
        let dir = TempDir::new().unwrap();
        let bindings = bindings_file(&dir, BINDINGS);
        let store = store();

        let report = generate(
            &GeneratorConfig::default(),
            Path::new("proj"),
            &bindings,
            opts(&[]),
            &store,
        )
        .unwrap();

        assert_eq!(report.class_name, "MainPanel");
        assert_eq!(report.binding_count, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(!report.has_failures());

        let cs = PathBuf::from("proj/Assets/Scripts/Scripts/UI/Generated/MainPanel.Bindings.cs");
        assert_eq!(
            store.get(&cs).as_deref(),
            Some("MainPanel\n        private Text _scoreText;\n")
        );
        let lua =
            PathBuf::from("proj/Assets/Scripts/LuaScripts/UI/Generated/MainPanel.Bindings.lua");
        assert_eq!(
            store.get(&lua).as_deref(),
            Some("MainPanel\n    __scoreText = nil,\n")
        );
    }

    #[test]
    fn test_one_language_failing_does_not_stop_others() {
        let dir = TempDir::new().unwrap();
        let bindings = bindings_file(&dir, BINDINGS);
        let store = MemoryStore::new()
            .with_file("proj/Templates/LuaBinding.txt", "-- ${ClassName}\n");

        let report = generate(
            &GeneratorConfig::default(),
            Path::new("proj"),
            &bindings,
            opts(&[]),
            &store,
        )
        .unwrap();

        assert_eq!(report.failed(), 1);
        let cs = &report.outcomes[0];
        assert_eq!(cs.id, "C#");
        assert!(cs.result.as_ref().unwrap_err().contains("CSharpBinding.txt"));
        let lua = report.outcomes[1].result.as_ref().unwrap();
        assert_eq!(lua.written, Some(WriteResult::Written));
        assert_eq!(lua.content, "-- MainPanel\n");
    }

    #[test]
    fn test_selection_and_overrides() {
        let dir = TempDir::new().unwrap();
        let bindings = bindings_file(&dir, BINDINGS);
        let store = store();
        let languages = vec!["lua".to_string(), "python".to_string()];

        let report = generate(
            &GeneratorConfig::default(),
            Path::new("proj"),
            &bindings,
            GenerateOptions {
                languages: &languages,
                class_name: Some("Hud"),
                output: Some(Path::new("out")),
                dry_run: true,
            },
            &store,
        )
        .unwrap();

        assert_eq!(report.outcomes.len(), 2);
        let lua = report.outcomes[0].result.as_ref().unwrap();
        assert_eq!(
            lua.path,
            PathBuf::from("proj/out/LuaScripts/UI/Generated/Hud.Bindings.lua")
        );
        assert_eq!(lua.written, None);
        assert_eq!(
            report.outcomes[1].result.as_ref().unwrap_err(),
            "language 'python' is not configured"
        );
        // Dry run writes nothing
        assert_eq!(store.paths().len(), 2);
    }

    #[test]
    fn test_validation_errors_abort() {
        let dir = TempDir::new().unwrap();
        let bindings = bindings_file(
            &dir,
            "[[bindings]]\nname = \"_a\"\nobject = \"A\"\n\n[[bindings]]\nname = \"_a\"\nobject = \"B\"\n",
        );
        let store = store();

        let err = generate(
            &GeneratorConfig::default(),
            Path::new("proj"),
            &bindings,
            opts(&[]),
            &store,
        )
        .unwrap_err();

        assert!(format!("{:#}", err).contains("'_a' is already used"));
        assert_eq!(store.paths().len(), 2);
    }
}
