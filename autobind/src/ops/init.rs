//! Init operation - default config and templates.

use std::path::Path;

use autobind_core::{File, FileRules, FileStore, Overwrite, WriteResult};
use autobind_manifest::{DEFAULT_CONFIG, GeneratorConfig};
use eyre::Result;
use tracing::warn;

use crate::{language::LanguageSupport, reports::InitReport};

/// Config file name looked up by every command.
pub const CONFIG_FILE: &str = "autobind.toml";

/// Write `autobind.toml` and one default template per configured language
/// into `dir`. Existing files are never replaced.
///
/// When a config already exists its paths and template names are used.
pub fn init(dir: &Path, store: &dyn FileStore) -> Result<InitReport> {
    let config_path = dir.join(CONFIG_FILE);
    let mut files = Vec::new();

    let written = File::new(&config_path, DEFAULT_CONFIG)
        .with_rules(FileRules {
            overwrite: Overwrite::IfMissing,
        })
        .write(store)?;
    files.push((config_path.clone(), written));

    let config = match written {
        WriteResult::Written => DEFAULT_CONFIG.parse::<GeneratorConfig>()?,
        WriteResult::Skipped => GeneratorConfig::from_str_with_filename(
            &store.read(&config_path)?,
            &config_path.display().to_string(),
        )?,
    };

    let template_dir = dir.join(&config.paths.template_base);
    for language in &config.languages {
        let support = match LanguageSupport::for_config(language) {
            Ok(support) => support,
            Err(err) => {
                warn!(id = %language.id, "no default template: {:#}", err);
                continue;
            }
        };
        let template = support.default_template(&language.template);
        let result = template.write(&template_dir, store)?;
        files.push((template.path(&template_dir), result));
    }

    Ok(InitReport {
        dir: dir.to_path_buf(),
        files,
    })
}
