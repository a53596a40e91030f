//! Name command report data structures.

use autobind_manifest::NamingStrategyKind;

use super::output::{Output, Report};

/// Preview of the names one strategy gives a node name and type.
#[derive(Debug, PartialEq, Eq)]
pub struct NameReport {
    pub strategy: NamingStrategyKind,
    pub type_name: String,
    pub field: String,
    pub property: String,
    /// Hungarian type prefix, shown for every strategy.
    pub prefix: String,
}

impl Report for NameReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("strategy", self.strategy.as_str());
        out.key_value("type", &self.type_name);
        out.key_value("field", &self.field);
        out.key_value("property", &self.property);
        out.key_value("prefix", &self.prefix);
    }
}
