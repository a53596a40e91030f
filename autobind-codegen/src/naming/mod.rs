//! Naming strategies for generated fields and properties.
//!
//! A [`NamingStrategy`] turns a raw object name plus its type into a field
//! name, and a field name into a property name. Three conventions exist:
//!
//! | strategy | field (`ScoreText`, `Text`, prefix `_`) | property |
//! |---|---|---|
//! | CamelCase | `_scoreText` | `ScoreText` |
//! | PascalCase | `_ScoreText` | `_ScoreText` |
//! | Hungarian | `_txtScoreText` | `ScoreText` |

mod camel;
mod hungarian;
mod pascal;

use std::{cell::OnceCell, sync::Arc};

pub use autobind_manifest::{NamingConfig, NamingStrategyKind};
use autobind_ir::TypeInfo;
pub use camel::CamelCase;
pub use hungarian::Hungarian;
pub use pascal::PascalCase;
use tracing::debug;

use crate::TypePrefixResolver;

/// Maps raw names to generated member names.
///
/// Implementations are pure: the same input always yields the same output.
/// Empty input never panics; it degrades to the configured prefix.
pub trait NamingStrategy: Send + Sync {
    fn kind(&self) -> NamingStrategyKind;

    /// Field name for an object called `original` bound as `ty`.
    fn field_name(&self, original: &str, ty: &TypeInfo) -> String;

    /// Property name derived from a field name.
    fn property_name(&self, field: &str) -> String;
}

/// Build the strategy selected by `config`.
pub fn build_strategy(
    config: &NamingConfig,
    resolver: Arc<TypePrefixResolver>,
) -> Arc<dyn NamingStrategy> {
    match config.strategy {
        NamingStrategyKind::CamelCase => Arc::new(CamelCase::new(&config.field_prefix)),
        NamingStrategyKind::PascalCase => Arc::new(PascalCase::new(&config.field_prefix)),
        NamingStrategyKind::Hungarian => Arc::new(Hungarian::new(
            &config.field_prefix,
            &config.property_prefix,
            resolver,
        )),
    }
}

/// Holds the naming config and lazily builds the matching strategy.
///
/// The strategy instance is created on first use and discarded whenever the
/// config changes.
pub struct NamingEngine {
    config: NamingConfig,
    resolver: Arc<TypePrefixResolver>,
    strategy: OnceCell<Arc<dyn NamingStrategy>>,
}

impl NamingEngine {
    pub fn new(config: NamingConfig) -> Self {
        Self::with_resolver(config, Arc::new(TypePrefixResolver::new()))
    }

    /// Share an existing prefix resolver (and its cache).
    pub fn with_resolver(config: NamingConfig, resolver: Arc<TypePrefixResolver>) -> Self {
        Self {
            config,
            resolver,
            strategy: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    pub fn resolver(&self) -> &Arc<TypePrefixResolver> {
        &self.resolver
    }

    /// Replace the config, dropping the cached strategy if anything changed.
    pub fn set_config(&mut self, config: NamingConfig) {
        if config == self.config {
            return;
        }
        if config.strategy != self.config.strategy {
            debug!(from = %self.config.strategy, to = %config.strategy, "naming strategy changed");
        }
        self.config = config;
        self.strategy.take();
    }

    /// The active strategy, built on first use.
    pub fn strategy(&self) -> Arc<dyn NamingStrategy> {
        self.strategy
            .get_or_init(|| build_strategy(&self.config, self.resolver.clone()))
            .clone()
    }

    /// Returns true once a strategy instance has been built.
    pub fn is_initialized(&self) -> bool {
        self.strategy.get().is_some()
    }

    pub fn field_name(&self, original: &str, ty: &TypeInfo) -> String {
        self.strategy().field_name(original, ty)
    }

    pub fn property_name(&self, field: &str) -> String {
        self.strategy().property_name(field)
    }
}

impl Default for NamingEngine {
    fn default() -> Self {
        Self::new(NamingConfig::default())
    }
}
