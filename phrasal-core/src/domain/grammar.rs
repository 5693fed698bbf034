//! Ordered phrase grammar with prefix-based tag matching
//!
//! A grammar is an explicitly ordered list of phrase types, each with the
//! tag prefixes it accepts. Declaration order is semantic: when a tag could
//! belong to more than one phrase type, the first declared entry wins. The
//! table is therefore never stored as a map.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Default grammar definition embedded at compile time
const DEFAULT_GRAMMAR_TOML: &str = include_str!("../../configs/grammars/default.toml");

static DEFAULT_GRAMMAR: OnceLock<Grammar> = OnceLock::new();

/// Errors raised while building or loading a grammar
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The grammar defines no phrase types at all
    #[error("grammar defines no phrase types")]
    Empty,

    /// A phrase entry is missing its label
    #[error("phrase entry {index} has an empty label")]
    EmptyLabel {
        /// Zero-based position of the offending entry
        index: usize,
    },

    /// Two entries share the same label
    #[error("duplicate phrase type '{label}'")]
    DuplicateLabel {
        /// The repeated label
        label: String,
    },

    /// An entry accepts no tag prefixes
    #[error("phrase type '{label}' lists no tag prefixes")]
    NoPrefixes {
        /// Label of the offending entry
        label: String,
    },

    /// An entry contains an empty prefix, which would match every tag
    #[error("phrase type '{label}' contains an empty tag prefix")]
    EmptyPrefix {
        /// Label of the offending entry
        label: String,
    },

    /// The grammar document is not valid TOML
    #[error("failed to parse grammar: {0}")]
    Parse(#[from] toml::de::Error),

    /// The grammar file could not be read
    #[error("failed to read grammar file {path}: {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// One phrase type and the tag prefixes it accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarEntry {
    /// Phrase label, e.g. "NP"
    pub label: String,
    /// Tag prefixes this phrase type accepts, e.g. ["DT", "JJ", "NN"]
    pub prefixes: Vec<String>,
}

impl GrammarEntry {
    /// Create an entry from a label and prefix list
    pub fn new<L, P>(label: L, prefixes: impl IntoIterator<Item = P>) -> Self
    where
        L: Into<String>,
        P: Into<String>,
    {
        Self {
            label: label.into(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `tag` starts with any of this entry's prefixes
    pub fn matches(&self, tag: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| tag.starts_with(prefix.as_str()))
    }
}

/// On-disk grammar document shape
#[derive(Debug, Deserialize)]
struct GrammarDocument {
    #[serde(default)]
    metadata: Option<GrammarMetadata>,
    #[serde(rename = "phrase", default)]
    phrases: Vec<GrammarEntry>,
}

#[derive(Debug, Deserialize)]
struct GrammarMetadata {
    name: String,
}

/// An ordered phrase-type table, immutable after construction.
///
/// TOML grammar files use an array of tables so declaration order survives
/// the round trip:
///
/// ```toml
/// [metadata]
/// name = "default"
///
/// [[phrase]]
/// label = "NP"
/// prefixes = ["DT", "JJ", "NN"]
///
/// [[phrase]]
/// label = "VP"
/// prefixes = ["VB", "NN"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    name: String,
    entries: Vec<GrammarEntry>,
}

impl Grammar {
    /// Build a grammar from ordered entries, validating as it goes
    pub fn from_entries(
        name: impl Into<String>,
        entries: Vec<GrammarEntry>,
    ) -> Result<Self, GrammarError> {
        validate_entries(&entries)?;
        Ok(Self {
            name: name.into(),
            entries,
        })
    }

    /// Parse a grammar from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, GrammarError> {
        let document: GrammarDocument = toml::from_str(toml_str)?;
        let name = document
            .metadata
            .map(|m| m.name)
            .unwrap_or_else(|| "custom".to_string());
        Self::from_entries(name, document.phrases)
    }

    /// Load a grammar from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GrammarError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GrammarError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The built-in two-entry grammar (NP before VP)
    pub fn builtin() -> &'static Grammar {
        DEFAULT_GRAMMAR.get_or_init(|| {
            Self::from_toml_str(DEFAULT_GRAMMAR_TOML)
                .expect("embedded default grammar must be valid")
        })
    }

    /// Grammar name, taken from the file metadata when loaded
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[GrammarEntry] {
        &self.entries
    }

    /// Number of phrase types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A validated grammar is never empty; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first phrase type whose prefix list matches `tag`.
    ///
    /// Entries are searched in declaration order and the first hit wins,
    /// regardless of prefix length or specificity. Returns `None` when no
    /// phrase type accepts the tag.
    pub fn first_match(&self, tag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(tag))
            .map(|entry| entry.label.as_str())
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn validate_entries(entries: &[GrammarEntry]) -> Result<(), GrammarError> {
    if entries.is_empty() {
        return Err(GrammarError::Empty);
    }

    for (index, entry) in entries.iter().enumerate() {
        if entry.label.is_empty() {
            return Err(GrammarError::EmptyLabel { index });
        }
        if entries[..index].iter().any(|e| e.label == entry.label) {
            return Err(GrammarError::DuplicateLabel {
                label: entry.label.clone(),
            });
        }
        if entry.prefixes.is_empty() {
            return Err(GrammarError::NoPrefixes {
                label: entry.label.clone(),
            });
        }
        if entry.prefixes.iter().any(|p| p.is_empty()) {
            return Err(GrammarError::EmptyPrefix {
                label: entry.label.clone(),
            });
        }
    }

    Ok(())
}
