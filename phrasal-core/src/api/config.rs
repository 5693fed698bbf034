//! Configuration API for phrase chunking

use crate::api::Error;
use crate::domain::grammar::Grammar;
use std::path::PathBuf;

/// Processing configuration.
///
/// Holds the grammar the chunker will run against; the grammar is validated
/// at build time, so a `Config` in hand is always usable.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) grammar: Grammar,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured grammar
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }
}

/// Where the builder should take its grammar from
#[derive(Debug, Default)]
enum GrammarSource {
    /// The built-in two-entry NP/VP grammar
    #[default]
    Builtin,
    /// An already-constructed grammar
    Inline(Grammar),
    /// A grammar definition file (TOML)
    File(PathBuf),
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    grammar: GrammarSource,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already-constructed grammar
    pub fn grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = GrammarSource::Inline(grammar);
        self
    }

    /// Load the grammar from a TOML definition file at build time
    pub fn grammar_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.grammar = GrammarSource::File(path.into());
        self
    }

    /// Build the configuration, loading and validating the grammar
    pub fn build(self) -> Result<Config, Error> {
        let grammar = match self.grammar {
            GrammarSource::Builtin => Grammar::builtin().clone(),
            GrammarSource::Inline(grammar) => grammar,
            GrammarSource::File(path) => Grammar::from_file(&path)?,
        };

        Ok(Config { grammar })
    }
}
