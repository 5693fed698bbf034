//! Tagged token type shared across the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// A word paired with its part-of-speech tag.
///
/// Produced by a [`Tagger`](crate::nlp::Tagger), consumed unchanged by the
/// chunker. The tag is an opaque label from the tagger's tagset; the grammar
/// interprets it purely by string prefix, so unknown tags are data rather
/// than errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface form of the token
    pub word: String,
    /// Part-of-speech tag, e.g. "DT", "NNS", "VBD"
    pub tag: String,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}
