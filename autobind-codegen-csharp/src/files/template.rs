use std::path::{Path, PathBuf};

use autobind_core::{FileRules, GeneratedFile, Overwrite};

/// Template written by `autobind init`.
pub const DEFAULT_TEMPLATE: &str = r#"// <auto-generated>
//     This file was generated by autobind. Do not edit it by hand.
// </auto-generated>

${Usings}

namespace ${Namespace}
{
    public partial class ${ClassName}
    {
${Fields}

${Properties}

        private void Bind(AutoBindComponent binder)
        {
${BindingCode}
        }

        private void UnBind()
        {
${UnBindingCode}
        }
    }
}
"#;

/// The default C# template, written under the template directory.
///
/// Never replaces an existing template so local edits survive `init`.
pub struct CSharpTemplate {
    file_name: String,
}

impl CSharpTemplate {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl GeneratedFile for CSharpTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
        }
    }

    fn render(&self) -> String {
        DEFAULT_TEMPLATE.to_string()
    }
}
