//! Indentation configuration for code generation.

/// Width of one indentation level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// 4-space indentation (C# and Lua bindings).
    pub const FOUR: Self = Self(4);

    /// Whitespace for `level` nesting levels.
    pub fn at(&self, level: usize) -> String {
        " ".repeat(usize::from(self.0) * level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}
