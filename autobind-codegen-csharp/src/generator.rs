use std::collections::{HashMap, HashSet};

use autobind_codegen::{
    BindingCodegen, CodeBuilder, GeneratorContext, Indent, Placeholders, present_bindings,
};
use autobind_ir::{Binding, BindingSet};
use autobind_manifest::Language;
use tracing::warn;

/// Placeholders the C# generator fills.
pub const PLACEHOLDERS: &[&str] = &[
    "Namespace",
    "Usings",
    "ClassName",
    "Fields",
    "Properties",
    "BindingCode",
    "UnBindingCode",
];

/// Depth of member declarations inside `namespace { class { ... } }`.
const MEMBER_LEVEL: usize = 2;
/// Depth of statements inside a method body.
const STATEMENT_LEVEL: usize = 3;

/// C# code generator producing a partial class with one field per binding.
pub struct Generator {
    ctx: GeneratorContext,
}

impl Generator {
    pub fn new(ctx: GeneratorContext) -> Self {
        Self { ctx }
    }

    fn usings(&self) -> String {
        CodeBuilder::new(Indent::FOUR)
            .each(&self.ctx.language.additional_namespaces, |b, ns| {
                b.line(&format!("using {};", ns))
            })
            .build()
    }

    fn fields(&self, bindings: &[&Binding]) -> String {
        block(MEMBER_LEVEL)
            .each(bindings, |b, binding| {
                b.line(&format!("private {} {};", type_ref(binding), binding.name))
            })
            .build()
    }

    /// Read-only accessors, emitted only where the property name adds
    /// something over the field name.
    ///
    /// A property whose name is shared with another property or with any
    /// field of the class is left out, so every member name stays unique.
    fn properties(&self, bindings: &[&Binding]) -> String {
        let naming = self.ctx.naming.as_ref();
        let fields: HashSet<&str> = bindings.iter().map(|b| b.name.as_str()).collect();
        let derived: Vec<String> = bindings
            .iter()
            .map(|b| naming.property_name(&b.name))
            .collect();

        let mut uses: HashMap<&str, usize> = HashMap::new();
        for property in &derived {
            *uses.entry(property.as_str()).or_default() += 1;
        }

        block(MEMBER_LEVEL)
            .each(bindings.iter().zip(&derived), |b, (binding, property)| {
                if property.is_empty() || *property == binding.name {
                    return b;
                }
                if uses.get(property.as_str()).is_some_and(|&n| n > 1)
                    || fields.contains(property.as_str())
                {
                    warn!(
                        field = %binding.name,
                        property = %property,
                        "property name clashes with another member, skipping"
                    );
                    return b;
                }
                b.line(&format!(
                    "public {} {} => {};",
                    type_ref(binding),
                    property,
                    binding.name
                ))
            })
            .build()
    }

    fn binding_code(&self, bindings: &[&Binding]) -> String {
        block(STATEMENT_LEVEL)
            .each(bindings, |b, binding| {
                b.line(&format!(
                    "{} = binder.Get<{}>(\"{}\");",
                    binding.name,
                    type_ref(binding),
                    binding.name
                ))
            })
            .build()
    }

    fn unbinding_code(&self, bindings: &[&Binding]) -> String {
        block(STATEMENT_LEVEL)
            .each(bindings, |b, binding| {
                b.line(&format!("{} = null;", binding.name))
            })
            .build()
    }
}

impl BindingCodegen for Generator {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn context(&self) -> &GeneratorContext {
        &self.ctx
    }

    fn placeholders(&self, class_name: &str, bindings: &BindingSet) -> Placeholders {
        let present: Vec<&Binding> = present_bindings(bindings).map(|(b, _)| b).collect();

        let mut values = Placeholders::new();
        values
            .set("Namespace", self.ctx.language.namespace.as_str())
            .block("Usings", self.usings())
            .set("ClassName", class_name)
            .block("Fields", self.fields(&present))
            .block("Properties", self.properties(&present))
            .block("BindingCode", self.binding_code(&present))
            .block("UnBindingCode", self.unbinding_code(&present));
        values
    }

    fn supplied_placeholders(&self) -> &'static [&'static str] {
        PLACEHOLDERS
    }
}

fn block(level: usize) -> CodeBuilder {
    CodeBuilder::new(Indent::FOUR).at_level(level)
}

/// `GameObject` for node bindings, otherwise the short component name.
fn type_ref(binding: &Binding) -> &str {
    binding.ty.type_ref(false)
}
