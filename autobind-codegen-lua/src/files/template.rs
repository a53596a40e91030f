use std::path::{Path, PathBuf};

use autobind_core::{FileRules, GeneratedFile, Overwrite};

/// Template written by `autobind init`.
pub const DEFAULT_TEMPLATE: &str = r#"-- This file was generated by autobind. Do not edit it by hand.

---@class ${ClassName}Fields
${TypeDefs}
local ${ClassName}Fields = {
${Fields}
}

---@class ${ClassName}Bindings
---@field binder any
---@field fields ${ClassName}Fields
local ${ClassName}Bindings = {}
${ClassName}Bindings.__index = ${ClassName}Bindings

function ${ClassName}Bindings.New(binder)
    local self = setmetatable({}, ${ClassName}Bindings)
    self.binder = binder
    self.fields = setmetatable({}, { __index = ${ClassName}Fields })
    return self
end

function ${ClassName}Bindings:Bind()
${BindingCode}
end

function ${ClassName}Bindings:Clear()
${ClearCode}
end

return ${ClassName}Bindings
"#;

/// The default Lua template. Written only when missing.
pub struct LuaTemplate {
    file_name: String,
}

impl LuaTemplate {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl GeneratedFile for LuaTemplate {
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
