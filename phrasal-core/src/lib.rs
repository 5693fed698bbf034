//! Grammar-driven phrase chunking for part-of-speech tagged text
//!
//! This crate groups POS-tagged words into labeled phrase chunks in a single
//! left-to-right pass. An ordered grammar maps tag prefixes to phrase types;
//! consecutive tokens that resolve to the same phrase type merge into one
//! group, and tokens no phrase type accepts are dropped. The scan is
//! deterministic: the same tokens and grammar always produce the same groups.
//!
//! # Architecture
//!
//! The crate is split into three layers:
//! - **Domain layer**: the grammar table and the chunking scan itself
//! - **NLP layer**: tokenizer and tagger collaborators that turn raw text
//!   into tagged tokens
//! - **API layer**: the [`PhraseChunker`] processor tying the pipeline
//!   together behind a stable configuration surface
//!
//! # Example
//!
//! ```rust
//! use phrasal_core::PhraseChunker;
//!
//! let chunker = PhraseChunker::new();
//! let output = chunker.process_text("The big dog ran.").unwrap();
//!
//! let phrases: Vec<_> = output.phrases().collect();
//! assert_eq!(phrases.len(), 2);
//! assert_eq!(phrases[0], ("NP", "The big dog".to_string()));
//! assert_eq!(phrases[1], ("VP", "ran".to_string()));
//! ```

pub mod api;
pub mod domain;
pub mod nlp;

pub use api::{
    Config, ConfigBuilder, Error, Input, Output, PhraseChunker, ProcessingMetadata,
    ProcessingStats, Result,
};
pub use domain::{Chunker, Grammar, GrammarEntry, GrammarError, PhraseGroup, TaggedToken};
pub use nlp::{RuleTagger, Tagger, Tokenizer, WordTokenizer};

/// Chunk text with the default configuration
pub fn chunk_text(text: &str) -> Result<Output> {
    let chunker = PhraseChunker::new();
    chunker.process(Input::from_text(text))
}

/// Chunk the contents of a file with the default configuration
pub fn chunk_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    let chunker = PhraseChunker::new();
    chunker.process(Input::from_file(path.as_ref().to_path_buf()))
}
