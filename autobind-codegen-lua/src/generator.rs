use autobind_codegen::{
    BindingCodegen, CodeBuilder, GeneratorContext, Indent, Placeholders, present_bindings,
};
use autobind_ir::{Binding, BindingSet};
use autobind_manifest::Language;

/// Placeholders the Lua generator fills.
pub const PLACEHOLDERS: &[&str] = &["ClassName", "TypeDefs", "Fields", "BindingCode", "ClearCode"];

/// Lua code generator.
///
/// Every binding is stored under `_{name}` in the instance's `fields`
/// table and fetched by its qualified host type, so node and component
/// bindings take the same path.
pub struct Generator {
    ctx: GeneratorContext,
}

impl Generator {
    pub fn new(ctx: GeneratorContext) -> Self {
        Self { ctx }
    }
}

impl BindingCodegen for Generator {
    fn language(&self) -> Language {
        Language::Lua
    }

    fn context(&self) -> &GeneratorContext {
        &self.ctx
    }

    fn placeholders(&self, class_name: &str, bindings: &BindingSet) -> Placeholders {
        let present: Vec<&Binding> = present_bindings(bindings).map(|(b, _)| b).collect();

        let type_defs = block(0).each(&present, |b, binding| {
            b.line(&format!(
                "---@field private _{} {}",
                binding.name,
                host_type(binding)
            ))
        });
        let fields = block(1).each(&present, |b, binding| {
            b.line(&format!("_{} = nil,", binding.name))
        });
        let binding_code = block(1).each(&present, |b, binding| {
            b.line(&format!(
                "self.fields._{} = self.binder:Get(\"{}\", typeof({}))",
                binding.name,
                binding.name,
                host_type(binding)
            ))
        });
        let clear_code = block(1).each(&present, |b, binding| {
            b.line(&format!("self.fields._{} = nil", binding.name))
        });

        let mut values = Placeholders::new();
        values
            .set("ClassName", class_name)
            .block("TypeDefs", type_defs.build())
            .block("Fields", fields.build())
            .block("BindingCode", binding_code.build())
            .block("ClearCode", clear_code.build());
        values
    }

    fn supplied_placeholders(&self) -> &'static [&'static str] {
        PLACEHOLDERS
    }
}

fn block(level: usize) -> CodeBuilder {
    CodeBuilder::new(Indent::FOUR).at_level(level)
}

/// `CS.{full_name}`, including `CS.UnityEngine.GameObject` for nodes.
fn host_type(binding: &Binding) -> String {
    format!("CS.{}", binding.ty.type_ref(true))
}
