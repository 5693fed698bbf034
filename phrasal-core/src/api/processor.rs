//! Main phrase chunking processor

use std::sync::Arc;
use std::time::Instant;

use crate::api::{Config, Error, Input, Output};
use crate::domain::chunker::{Chunker, PhraseGroup};
use crate::domain::token::TaggedToken;
use crate::nlp::{RuleTagger, Tagger, Tokenizer, WordTokenizer};

/// Runs the full text-to-phrase-groups pipeline.
///
/// Owns the grammar-driven chunker plus the tokenizer and tagger
/// collaborators. Everything is immutable after construction, so one
/// processor can be shared freely across threads; each call keeps its scan
/// state on its own stack.
pub struct PhraseChunker {
    chunker: Chunker,
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Arc<dyn Tagger>,
    config: Config,
}

impl PhraseChunker {
    /// Create a processor with the default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("default config should always be valid")
    }

    /// Create a processor with a custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        Ok(Self {
            chunker: Chunker::new(config.grammar.clone()),
            tokenizer: Arc::new(WordTokenizer::new()),
            tagger: Arc::new(RuleTagger::new()),
            config,
        })
    }

    /// Create a processor over a specific grammar
    pub fn with_grammar(grammar: crate::domain::Grammar) -> Self {
        Self {
            chunker: Chunker::new(grammar.clone()),
            tokenizer: Arc::new(WordTokenizer::new()),
            tagger: Arc::new(RuleTagger::new()),
            config: Config { grammar },
        }
    }

    /// Replace the tokenizer collaborator
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the tagger collaborator
    pub fn with_tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Process input through tokenize, tag and chunk
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();

        let text = input.into_text()?;
        let tokens = self.tokenizer.tokenize(&text);
        let tagged = self.tagger.tag(&tokens);
        let groups = self.chunker.chunk_slice(&tagged);

        Ok(Output::from_parts(groups, tagged, start.elapsed()))
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output, Error> {
        self.process(Input::from_text(text))
    }

    /// Chunk tokens that were tagged elsewhere.
    ///
    /// This is the bare grouping operation: no tokenizer or tagger runs,
    /// and it cannot fail. Unknown tags are treated as phrase boundaries,
    /// never as errors.
    pub fn chunk_tagged(&self, tokens: &[TaggedToken]) -> Vec<PhraseGroup> {
        self.chunker.chunk_slice(tokens)
    }

    /// The grammar driving this processor
    pub fn grammar(&self) -> &crate::domain::Grammar {
        self.chunker.grammar()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for PhraseChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PhraseChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseChunker")
            .field("grammar", &self.grammar().name())
            .finish()
    }
}
