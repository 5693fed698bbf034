//! Default rule-based part-of-speech tagger
//!
//! Tags tokens with Penn-Treebank-style labels using three layers: the
//! embedded closed-class lexicon, regex shape rules for numbers, and suffix
//! heuristics for open-class words. Every decision is deterministic; tagging
//! accuracy is explicitly not part of the contract, only stability of the
//! output for a given input.

use crate::domain::token::TaggedToken;
use crate::nlp::lexicon::Lexicon;
use crate::nlp::Tagger;
use regex::Regex;

/// Derivational suffixes mapped to tags, checked in order
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ing", "VBG"),
    ("ness", "NN"),
    ("ment", "NN"),
    ("tion", "NN"),
    ("sion", "NN"),
    ("ship", "NN"),
    ("ity", "NN"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("ible", "JJ"),
    ("able", "JJ"),
    ("ive", "JJ"),
    ("ish", "JJ"),
    ("est", "JJS"),
    ("ed", "VBD"),
    ("ly", "RB"),
];

/// Lexicon-then-heuristics tagger.
///
/// Unknown words fall through lexicon lookup, number shapes, the
/// capitalization rule and suffix rules, ending at the `NN` default the
/// same way simple unigram taggers do.
#[derive(Debug)]
pub struct RuleTagger {
    lexicon: &'static Lexicon,
    number: Regex,
    ordinal: Regex,
}

impl RuleTagger {
    /// Create a new tagger over the embedded lexicon
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::shared(),
            number: Regex::new(r"^\d+(?:[.,/-]\d+)*$").expect("static number pattern is valid"),
            ordinal: Regex::new(r"^\d+(?:st|nd|rd|th)$").expect("static ordinal pattern is valid"),
        }
    }

    /// Tag a single word
    fn tag_word(&self, word: &str, sentence_initial: bool) -> &'static str {
        if let Some(tag) = punctuation_tag(word) {
            return tag;
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.lookup(&lower) {
            return tag;
        }

        if self.number.is_match(word) {
            return "CD";
        }
        if self.ordinal.is_match(&lower) {
            return "JJ";
        }

        // Mid-sentence capitalization marks proper nouns; sentence-initial
        // capitals say nothing, so those fall through to the suffix rules.
        if !sentence_initial && word.chars().next().is_some_and(char::is_uppercase) {
            return "NNP";
        }

        for (suffix, tag) in SUFFIX_RULES {
            if lower.len() > suffix.len() + 1 && lower.ends_with(suffix) {
                return tag;
            }
        }

        // Plural nouns, skipping -ss/-us/-is words like "class" or "basis"
        if lower.len() > 3
            && lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
        {
            return "NNS";
        }

        "NN"
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tagged = Vec::with_capacity(tokens.len());
        let mut sentence_initial = true;

        for word in tokens {
            let tag = self.tag_word(word, sentence_initial);
            sentence_initial = tag == ".";
            tagged.push(TaggedToken::new(word.clone(), tag));
        }

        tagged
    }
}

/// Penn-convention tag for a token made entirely of punctuation.
///
/// Sentence-final marks share the "." tag, mid-sentence separators share
/// ":", bracket and quote tokens collapse onto their canonical forms, and
/// anything else symbolic becomes "SYM".
fn punctuation_tag(word: &str) -> Option<&'static str> {
    if word.is_empty() || word.chars().any(char::is_alphanumeric) {
        return None;
    }

    let tag = match word {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "-" | "--" | "\u{2013}" | "\u{2014}" | "\u{2026}" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "``" | "\u{201c}" | "\u{2018}" => "``",
        "''" | "\"" | "'" | "`" | "\u{201d}" | "\u{2019}" => "''",
        "$" => "$",
        "#" => "#",
        ellipsis if ellipsis.chars().all(|c| c == '.') => ":",
        _ => "SYM",
    };
    Some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_all(words: &[&str]) -> Vec<(String, String)> {
        let tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        RuleTagger::new()
            .tag(&tokens)
            .into_iter()
            .map(|t| (t.word, t.tag))
            .collect()
    }

    fn tag_of(word: &str) -> String {
        tag_all(&[word]).remove(0).1
    }

    #[test]
    fn test_lexicon_words() {
        assert_eq!(tag_of("the"), "DT");
        assert_eq!(tag_of("ran"), "VBD");
        assert_eq!(tag_of("big"), "JJ");
        assert_eq!(tag_of("and"), "CC");
    }

    #[test]
    fn test_lexicon_lookup_is_case_insensitive() {
        assert_eq!(tag_of("The"), "DT");
        assert_eq!(tag_of("THE"), "DT");
    }

    #[test]
    fn test_punctuation_tags() {
        assert_eq!(tag_of("."), ".");
        assert_eq!(tag_of("!"), ".");
        assert_eq!(tag_of("?"), ".");
        assert_eq!(tag_of(","), ",");
        assert_eq!(tag_of(";"), ":");
        assert_eq!(tag_of("..."), ":");
        assert_eq!(tag_of("--"), ":");
        assert_eq!(tag_of("("), "(");
        assert_eq!(tag_of(")"), ")");
        assert_eq!(tag_of("\""), "''");
        assert_eq!(tag_of("$"), "$");
        assert_eq!(tag_of("@"), "SYM");
    }

    #[test]
    fn test_clitic_tags() {
        assert_eq!(tag_of("n't"), "RB");
        assert_eq!(tag_of("'s"), "POS");
        assert_eq!(tag_of("'ll"), "MD");
        assert_eq!(tag_of("'re"), "VBP");
    }

    #[test]
    fn test_number_shapes() {
        assert_eq!(tag_of("42"), "CD");
        assert_eq!(tag_of("3.14"), "CD");
        assert_eq!(tag_of("1,000"), "CD");
        assert_eq!(tag_of("2024-08"), "CD");
        assert_eq!(tag_of("3rd"), "JJ");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag_of("walking"), "VBG");
        assert_eq!(tag_of("jumped"), "VBD");
        assert_eq!(tag_of("quickly"), "RB");
        assert_eq!(tag_of("happiness"), "NN");
        assert_eq!(tag_of("movement"), "NN");
        assert_eq!(tag_of("station"), "NN");
        assert_eq!(tag_of("famous"), "JJ");
        assert_eq!(tag_of("helpful"), "JJ");
        assert_eq!(tag_of("biggest"), "JJS");
    }

    #[test]
    fn test_plural_rule_and_exceptions() {
        assert_eq!(tag_of("dogs"), "NNS");
        assert_eq!(tag_of("foxes"), "NNS");
        assert_eq!(tag_of("class"), "NN");
        assert_eq!(tag_of("basis"), "NN");
        assert_eq!(tag_of("bonus"), "NN");
    }

    #[test]
    fn test_default_is_nn() {
        assert_eq!(tag_of("dog"), "NN");
        assert_eq!(tag_of("xylophone"), "NN");
    }

    #[test]
    fn test_capitalization_marks_proper_nouns_mid_sentence() {
        let tagged = tag_all(&["The", "dog", "chased", "Felix"]);
        assert_eq!(tagged[3], ("Felix".to_string(), "NNP".to_string()));
    }

    #[test]
    fn test_sentence_initial_capital_is_not_proper() {
        let tagged = tag_all(&["Felix", "ran"]);
        assert_eq!(tagged[0], ("Felix".to_string(), "NN".to_string()));
    }

    #[test]
    fn test_sentence_state_resets_after_final_punctuation() {
        // "Rex" opens a new sentence after the period, so it is treated as
        // sentence-initial again rather than as a proper noun.
        let tagged = tag_all(&["Dogs", "ran", ".", "Rex", "slept"]);
        assert_eq!(tagged[0].1, "NNS");
        assert_eq!(tagged[3].1, "NN");
    }

    #[test]
    fn test_tagging_is_deterministic() {
        let words = ["The", "big", "dogs", "ran", "quickly", "."];
        assert_eq!(tag_all(&words), tag_all(&words));
    }
}
