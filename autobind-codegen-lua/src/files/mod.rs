mod template;

pub use template::{DEFAULT_TEMPLATE, LuaTemplate};
