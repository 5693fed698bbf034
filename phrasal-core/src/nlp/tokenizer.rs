//! Default word tokenizer
//!
//! Splits raw text into word tokens the way Treebank-style tokenizers do:
//! whitespace separates chunks, punctuation is detached from chunk edges,
//! and contraction clitics ("n't", "'s", "'ll", ...) become their own
//! tokens. Word-internal punctuation is left alone, so hyphenated words,
//! decimals and dotted acronyms survive intact. Only the "text in, ordered
//! word tokens out" contract is promised; the exact splitting rules are an
//! implementation detail.

use crate::nlp::Tokenizer;

/// Clitic suffixes split from their host word, longest first
const CLITIC_SUFFIXES: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Treebank-style whitespace-and-punctuation tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    fn split_chunk(&self, chunk: &str, out: &mut Vec<String>) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut start = 0;
        let mut end = chars.len();

        while start < end && is_detachable(chars[start]) {
            start += 1;
        }
        while end > start && is_detachable(chars[end - 1]) {
            end -= 1;
        }

        emit_punct_run(&chars[..start], out);
        self.split_core(&chars[start..end].iter().collect::<String>(), out);
        emit_punct_run(&chars[end..], out);
    }

    /// Emit the word core, splitting off a trailing clitic when present
    fn split_core(&self, core: &str, out: &mut Vec<String>) {
        if core.is_empty() {
            return;
        }
        if let Some(cut) = clitic_split_point(core) {
            out.push(core[..cut].to_string());
            out.push(core[cut..].to_string());
        } else {
            out.push(core.to_string());
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            self.split_chunk(chunk, &mut tokens);
        }
        tokens
    }
}

/// Whether a character detaches from a chunk edge
fn is_detachable(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Emit detached punctuation, keeping "..." and "--" style runs whole
fn emit_punct_run(chars: &[char], out: &mut Vec<String>) {
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '.' || c == '-' {
            let mut j = i + 1;
            while j < chars.len() && chars[j] == c {
                j += 1;
            }
            if j - i >= 2 {
                out.push(chars[i..j].iter().collect());
                i = j;
                continue;
            }
        }
        out.push(c.to_string());
        i += 1;
    }
}

/// Byte index where a trailing clitic starts, if the core ends in one.
///
/// Straight and curly apostrophes both count, the comparison ignores ASCII
/// case, and the host word must be non-empty for the split to apply.
fn clitic_split_point(core: &str) -> Option<usize> {
    for suffix in CLITIC_SUFFIXES {
        for apostrophe in ['\'', '\u{2019}'] {
            let candidate = suffix.replace('\'', &apostrophe.to_string());
            if core.len() <= candidate.len() {
                continue;
            }
            let cut = core.len() - candidate.len();
            if core
                .get(cut..)
                .is_some_and(|tail| tail.eq_ignore_ascii_case(&candidate))
            {
                return Some(cut);
            }
        }
    }
    None
}
