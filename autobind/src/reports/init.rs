//! Init command report data structures.

use std::path::PathBuf;

use autobind_core::WriteResult;

use super::output::{Output, Report};

/// Files touched by `init`, in creation order.
#[derive(Debug)]
pub struct InitReport {
    pub dir: PathBuf,
    pub files: Vec<(PathBuf, WriteResult)>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Initialized {}", self.dir.display()));
        for (path, result) in &self.files {
            match result {
                WriteResult::Written => out.added_item(&path.display().to_string()),
                WriteResult::Skipped => {
                    out.list_item(&format!("{} (exists, kept)", path.display()))
                }
            }
        }

        out.newline();
        out.section("Next steps");
        out.preformatted(
            "  autobind add MainPanel.bindings.toml --object Canvas/Title --type UnityEngine.UI.Text",
        );
        out.preformatted("  autobind generate MainPanel.bindings.toml");
    }
}
