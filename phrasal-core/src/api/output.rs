//! Output types for the processing pipeline

use crate::domain::chunker::PhraseGroup;
use crate::domain::token::TaggedToken;
use std::time::Duration;

/// Processing output with the intermediate tagging and run metadata.
///
/// The tagged token sequence is carried alongside the groups so callers can
/// echo or log what the tagger produced without re-running the pipeline.
#[derive(Debug, Clone)]
pub struct Output {
    /// Phrase groups in input order
    pub groups: Vec<PhraseGroup>,
    /// The tagged tokens the groups were chunked from
    pub tokens: Vec<TaggedToken>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about one processing call
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Token and group counts
    pub stats: ProcessingStats,
}

/// Token accounting for one processing call
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    /// Tokens produced by the tagger
    pub token_count: usize,
    /// Tokens that landed in a phrase group
    pub grouped_token_count: usize,
    /// Tokens whose tags matched no phrase type
    pub dropped_token_count: usize,
    /// Number of phrase groups emitted
    pub group_count: usize,
}

impl Output {
    /// Assemble an output, deriving the stats from the parts
    pub(crate) fn from_parts(
        groups: Vec<PhraseGroup>,
        tokens: Vec<TaggedToken>,
        duration: Duration,
    ) -> Self {
        let token_count = tokens.len();
        let grouped_token_count = groups.iter().map(PhraseGroup::len).sum();
        let stats = ProcessingStats {
            token_count,
            grouped_token_count,
            dropped_token_count: token_count - grouped_token_count,
            group_count: groups.len(),
        };

        Self {
            groups,
            tokens,
            metadata: ProcessingMetadata { duration, stats },
        }
    }

    /// Whether the call produced no groups at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over `(phrase type, phrase text)` pairs in output order
    pub fn phrases(&self) -> impl Iterator<Item = (&str, String)> {
        self.groups
            .iter()
            .map(|group| (group.phrase_type.as_str(), group.phrase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_groups() -> Vec<PhraseGroup> {
        vec![
            PhraseGroup::new(
                "NP",
                [
                    TaggedToken::new("The", "DT"),
                    TaggedToken::new("dog", "NN"),
                ],
            ),
            PhraseGroup::new("VP", [TaggedToken::new("ran", "VBD")]),
        ]
    }

    fn sample_tokens() -> Vec<TaggedToken> {
        vec![
            TaggedToken::new("The", "DT"),
            TaggedToken::new("dog", "NN"),
            TaggedToken::new("ran", "VBD"),
            TaggedToken::new(".", "."),
        ]
    }

    #[test]
    fn test_stats_account_for_every_token() {
        let output = Output::from_parts(sample_groups(), sample_tokens(), Duration::ZERO);
        let stats = &output.metadata.stats;

        assert_eq!(stats.token_count, 4);
        assert_eq!(stats.grouped_token_count, 3);
        assert_eq!(stats.dropped_token_count, 1);
        assert_eq!(stats.group_count, 2);
    }

    #[test]
    fn test_phrases_iterator_renders_joined_words() {
        let output = Output::from_parts(sample_groups(), sample_tokens(), Duration::ZERO);
        let phrases: Vec<(&str, String)> = output.phrases().collect();

        assert_eq!(
            phrases,
            vec![("NP", "The dog".to_string()), ("VP", "ran".to_string())]
        );
    }

    #[test]
    fn test_empty_output() {
        let output = Output::from_parts(Vec::new(), Vec::new(), Duration::ZERO);
        assert!(output.is_empty());
        assert_eq!(output.metadata.stats.token_count, 0);
        assert_eq!(output.metadata.stats.dropped_token_count, 0);
    }
}
