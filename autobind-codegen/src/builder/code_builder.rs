//! Line builder for generated code blocks.

use super::Indent;

/// Fluent builder for one block of lines at a fixed nesting depth.
///
/// # Example
///
/// ```
/// use autobind_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::default()
///     .at_level(2)
///     .line("private Text _title;")
///     .build();
///
/// assert_eq!(code, "        private Text _title;\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    prefix: String,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            prefix: String::new(),
            indent,
            buffer: String::new(),
        }
    }

    /// Start at a fixed nesting depth, for blocks spliced into a template
    /// at a known indentation.
    pub fn at_level(mut self, level: usize) -> Self {
        self.prefix = self.indent.at(level);
        self
    }

    /// Add a line of code at the block's indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.buffer.push_str(&self.prefix);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
