mod template;

pub use template::{CSharpTemplate, DEFAULT_TEMPLATE};
