//! Tokenizer and tagger collaborators
//!
//! The chunker consumes tagged tokens and never calls these directly; they
//! exist so the processing pipeline can turn raw text into chunker input.
//! Both collaborators sit behind trait seams and can be swapped on the
//! processor with any `Send + Sync` implementation.

use crate::domain::token::TaggedToken;

mod lexicon;
mod tagger;
mod tokenizer;

pub use tagger::RuleTagger;
pub use tokenizer::WordTokenizer;

/// Splits raw text into ordered word tokens.
///
/// Implementations decide their own punctuation and contraction rules; the
/// only contract is a deterministic, ordered token sequence for a given
/// input.
pub trait Tokenizer: Send + Sync {
    /// Tokenize text into words
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Assigns a part-of-speech tag to each token.
///
/// Tags are opaque strings as far as the chunker is concerned; the grammar
/// interprets them by prefix only, so any tagset works as long as it is
/// applied consistently.
pub trait Tagger: Send + Sync {
    /// Tag tokens in order, one tag per token
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}
