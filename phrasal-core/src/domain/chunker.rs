//! Single-pass phrase chunking over tagged tokens
//!
//! The chunker walks a token sequence once, left to right, grouping maximal
//! runs of adjacent tokens whose tags resolve to the same phrase type. Tokens
//! whose tags match no phrase type close any open run and are dropped from
//! the output.

use crate::domain::grammar::Grammar;
use crate::domain::token::TaggedToken;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::mem;

/// A maximal run of adjacent tokens sharing one phrase type.
///
/// Groups are closed exactly once, when the run ends, and never mutated
/// afterwards. The tokens keep their original order and their tags, so
/// callers can inspect why a word landed in the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseGroup {
    /// Phrase label from the grammar, e.g. "NP"
    pub phrase_type: String,
    /// Tokens of the run in their original order
    pub tokens: Vec<TaggedToken>,
}

impl PhraseGroup {
    /// Create a group from a label and its tokens
    pub fn new(phrase_type: impl Into<String>, tokens: impl IntoIterator<Item = TaggedToken>) -> Self {
        Self {
            phrase_type: phrase_type.into(),
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Surface words of the group, in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|token| token.word.as_str())
    }

    /// Words joined by single spaces, the form persisted by callers
    pub fn phrase(&self) -> String {
        self.words().collect::<Vec<_>>().join(" ")
    }

    /// Number of tokens in the group
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Groups are never emitted empty; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for PhraseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.phrase_type, self.phrase())
    }
}

/// The run currently being built during a scan.
///
/// The open phrase type borrows its label from the grammar, and most runs
/// are short, so pending tokens live inline until a group is emitted.
#[derive(Debug, Default)]
struct ScanState<'g> {
    open_type: Option<&'g str>,
    pending: SmallVec<[TaggedToken; 4]>,
}

impl<'g> ScanState<'g> {
    /// Whether the open run has the given phrase type
    fn is_open_as(&self, phrase_type: &str) -> bool {
        self.open_type == Some(phrase_type)
    }

    /// Append a token to the open run
    fn extend(&mut self, token: TaggedToken) {
        self.pending.push(token);
    }

    /// Begin a new run; any previous run must already be closed
    fn start(&mut self, phrase_type: &'g str, token: TaggedToken) {
        debug_assert!(self.pending.is_empty());
        self.open_type = Some(phrase_type);
        self.pending.push(token);
    }

    /// Emit the open run, if any, and reset to the closed state
    fn close_into(&mut self, groups: &mut Vec<PhraseGroup>) {
        let phrase_type = match self.open_type.take() {
            Some(label) if !self.pending.is_empty() => label,
            _ => {
                self.pending.clear();
                return;
            }
        };
        groups.push(PhraseGroup {
            phrase_type: phrase_type.to_string(),
            tokens: mem::take(&mut self.pending).into_vec(),
        });
    }
}

/// Groups tagged tokens into labeled phrase runs.
///
/// Chunking is deterministic: the same grammar and token sequence always
/// produce the same groups. The pass is O(n) in the token count with a
/// constant factor bounded by the grammar size, and it never recurses or
/// backtracks.
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    grammar: Grammar,
}

impl Chunker {
    /// Create a chunker over the given grammar
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// The grammar driving this chunker
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Chunk a tagged token sequence into phrase groups.
    ///
    /// Each token's tag is resolved against the grammar in declaration
    /// order. A token extends the open run when it resolves to the same
    /// phrase type, closes it and starts a new run when it resolves to a
    /// different one, and closes it without starting anything when it
    /// resolves to no phrase type at all. Unresolved tokens do not appear
    /// in the output. The end of input closes whatever run is still open,
    /// so a trailing run is never lost.
    pub fn chunk<I>(&self, tokens: I) -> Vec<PhraseGroup>
    where
        I: IntoIterator<Item = TaggedToken>,
    {
        let mut groups = Vec::new();
        let mut state = ScanState::default();

        for token in tokens {
            match self.grammar.first_match(&token.tag) {
                Some(phrase_type) if state.is_open_as(phrase_type) => {
                    state.extend(token);
                }
                Some(phrase_type) => {
                    state.close_into(&mut groups);
                    state.start(phrase_type, token);
                }
                None => {
                    state.close_into(&mut groups);
                }
            }
        }
        state.close_into(&mut groups);

        groups
    }

    /// Chunk borrowed tokens without consuming them
    pub fn chunk_slice(&self, tokens: &[TaggedToken]) -> Vec<PhraseGroup> {
        self.chunk(tokens.iter().cloned())
    }
}
