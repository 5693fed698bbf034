//! Domain layer for grammar-driven phrase chunking
//!
//! This module contains the pure chunking logic: tagged tokens, the ordered
//! phrase grammar, and the single-pass scanner that groups tokens into
//! labeled phrase runs. Nothing here performs I/O.

pub mod chunker;
pub mod grammar;
pub mod token;

pub use chunker::{Chunker, PhraseGroup};
pub use grammar::{Grammar, GrammarEntry, GrammarError};
pub use token::TaggedToken;
