//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One reported phrase: the source sentence, the phrase type and the
/// space-joined words of the phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRecord {
    /// Source sentence the phrase was found in
    pub document: String,
    /// Phrase label from the grammar, e.g. "NP"
    pub phrase_type: String,
    /// Space-joined words of the phrase
    pub phrase: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single phrase record
    fn write_record(&mut self, record: &PhraseRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod csv;
pub mod json;
pub mod text;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
