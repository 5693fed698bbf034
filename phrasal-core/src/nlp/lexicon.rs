//! Embedded closed-class lexicon for the fallback tagger
//!
//! Closed word classes (determiners, pronouns, prepositions, auxiliaries and
//! so on) change slowly enough to ship as static tables. Open-class words are
//! not listed here except for a seed set of everyday verbs, adjectives and
//! irregular past forms that suffix heuristics cannot recover. Lookups are
//! case-insensitive and allocation-free after the shared map is built.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Determiners
const DT_WORDS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "another", "all", "both",
];

/// Personal pronouns
const PRP_WORDS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "someone", "anyone", "everyone",
    "nobody", "something", "anything", "everything", "nothing",
];

/// Possessive pronouns
const PRP_POSS_WORDS: &[&str] = &["my", "your", "his", "her", "its", "our", "their", "mine", "yours", "ours", "theirs"];

/// Coordinating conjunctions
const CC_WORDS: &[&str] = &["and", "or", "but", "nor", "yet", "so", "plus"];

/// Prepositions and subordinating conjunctions
const IN_WORDS: &[&str] = &[
    "of", "in", "on", "at", "by", "with", "from", "for", "into", "onto", "over", "under", "after",
    "before", "between", "through", "during", "without", "about", "against", "among", "around",
    "behind", "below", "beneath", "beside", "near", "since", "within", "upon", "across", "off",
    "while", "although", "though", "because", "if", "unless", "until", "as", "than", "via",
    "toward", "towards",
];

/// Modal verbs, including contracted clitic forms split off by the tokenizer
const MD_WORDS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must", "ought", "'ll",
    "'d", "\u{2019}ll", "\u{2019}d",
];

/// Existential "there"
const EX_WORDS: &[&str] = &["there"];

/// Wh-determiners and wh-pronouns
const WDT_WORDS: &[&str] = &["which", "whichever", "whatever"];
const WP_WORDS: &[&str] = &["who", "whom", "what"];
const WP_POSS_WORDS: &[&str] = &["whose"];
const WRB_WORDS: &[&str] = &["where", "when", "why", "how"];

/// Common adverbs and the negation clitic
const RB_WORDS: &[&str] = &[
    "not", "never", "always", "often", "sometimes", "usually", "very", "too", "quite", "rather",
    "really", "soon", "now", "then", "here", "well", "just", "also", "again", "already", "still",
    "almost", "away", "back", "even", "once", "twice", "n't", "n\u{2019}t",
];

/// Interjections
const UH_WORDS: &[&str] = &["oh", "hey", "wow", "hello", "hi", "yes", "please"];

/// Spelled-out cardinal numbers
const CD_WORDS: &[&str] = &[
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve",
    "twenty", "fifty", "hundred", "thousand", "million",
];

/// Everyday base-form verbs the suffix heuristics cannot identify
const VB_WORDS: &[&str] = &[
    "be", "run", "walk", "jump", "eat", "drink", "sleep", "chase", "play", "read", "write",
    "sing", "dance", "swim", "fly", "go", "come", "see", "look", "make", "take", "give", "get",
    "say", "tell", "know", "think", "find", "want", "like", "love", "hate", "need", "help",
    "work", "live", "move", "stop", "start", "open", "close", "buy", "sell", "bark", "sit",
    "stand", "hold", "keep", "let", "put", "bring", "catch", "throw", "win", "lose", "pay",
    "meet", "learn", "teach", "grow", "fall", "feel", "hear", "speak", "talk", "call", "ask",
    "answer", "wait", "watch", "turn", "leave", "stay",
];

/// Irregular past-tense forms
const VBD_WORDS: &[&str] = &[
    "ran", "went", "came", "saw", "ate", "drank", "slept", "made", "took", "gave", "got", "said",
    "told", "knew", "thought", "found", "felt", "heard", "spoke", "sat", "stood", "held", "kept",
    "left", "brought", "caught", "threw", "won", "lost", "paid", "met", "taught", "grew", "fell",
    "wrote", "sang", "swam", "flew", "bought", "sold", "built", "sent", "spent", "began",
    "broke", "chose", "drove", "rode", "rose", "wore", "woke", "did", "was", "were", "had",
];

/// Irregular past participles
const VBN_WORDS: &[&str] = &[
    "done", "gone", "seen", "eaten", "taken", "given", "written", "broken", "chosen", "driven",
    "fallen", "grown", "known", "thrown", "worn", "woken", "been", "begun",
];

/// Present-tense auxiliary and copula forms, plus contracted clitics
const VBP_WORDS: &[&str] = &[
    "am", "are", "have", "do", "'re", "'ve", "'m", "\u{2019}re", "\u{2019}ve", "\u{2019}m",
];
const VBZ_WORDS: &[&str] = &["is", "has", "does", "goes"];
const VBG_WORDS: &[&str] = &["being", "having", "doing", "going"];

/// Possessive clitic split off by the tokenizer
const POS_WORDS: &[&str] = &["'s", "\u{2019}s"];

/// "to" carries its own tag in the Penn tagset
const TO_WORDS: &[&str] = &["to"];

/// Everyday adjectives that carry no derivational suffix
const JJ_WORDS: &[&str] = &[
    "big", "small", "large", "little", "good", "bad", "new", "old", "young", "long", "short",
    "high", "low", "quick", "slow", "fast", "happy", "sad", "hot", "cold", "red", "blue",
    "green", "black", "white", "brown", "gray", "great", "nice", "fine", "early", "late",
    "hard", "soft", "easy", "strong", "weak", "full", "empty", "rich", "poor", "clean",
    "dirty", "bright", "dark", "warm", "cool", "lazy", "other", "own", "same", "few", "many",
    "much", "more", "most", "several", "free", "whole", "deep", "wide",
];

/// Tag tables in lookup-priority order; earlier tables win on duplicates.
const TABLES: &[(&str, &[&str])] = &[
    ("DT", DT_WORDS),
    ("PRP", PRP_WORDS),
    ("PRP$", PRP_POSS_WORDS),
    ("CC", CC_WORDS),
    ("IN", IN_WORDS),
    ("TO", TO_WORDS),
    ("MD", MD_WORDS),
    ("EX", EX_WORDS),
    ("WDT", WDT_WORDS),
    ("WP", WP_WORDS),
    ("WP$", WP_POSS_WORDS),
    ("WRB", WRB_WORDS),
    ("RB", RB_WORDS),
    ("UH", UH_WORDS),
    ("CD", CD_WORDS),
    ("VB", VB_WORDS),
    ("VBD", VBD_WORDS),
    ("VBN", VBN_WORDS),
    ("VBP", VBP_WORDS),
    ("VBZ", VBZ_WORDS),
    ("VBG", VBG_WORDS),
    ("POS", POS_WORDS),
    ("JJ", JJ_WORDS),
];

static SHARED: OnceLock<Lexicon> = OnceLock::new();

/// Case-insensitive word-to-tag map built from the static tables.
#[derive(Debug)]
pub(crate) struct Lexicon {
    words: HashMap<&'static str, &'static str>,
}

impl Lexicon {
    fn build() -> Self {
        let mut words = HashMap::new();
        for (tag, table) in TABLES {
            for word in *table {
                // First table wins so class priority stays explicit above
                words.entry(*word).or_insert(*tag);
            }
        }
        Self { words }
    }

    /// The process-wide lexicon, built on first use
    pub(crate) fn shared() -> &'static Self {
        SHARED.get_or_init(Self::build)
    }

    /// Look up an already-lowercased word
    pub(crate) fn lookup(&self, word_lower: &str) -> Option<&'static str> {
        self.words.get(word_lower).copied()
    }

    /// Number of distinct entries
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_is_cached() {
        assert!(std::ptr::eq(Lexicon::shared(), Lexicon::shared()));
    }

    #[test]
    fn test_closed_class_lookups() {
        let lexicon = Lexicon::shared();
        assert_eq!(lexicon.lookup("the"), Some("DT"));
        assert_eq!(lexicon.lookup("and"), Some("CC"));
        assert_eq!(lexicon.lookup("of"), Some("IN"));
        assert_eq!(lexicon.lookup("to"), Some("TO"));
        assert_eq!(lexicon.lookup("could"), Some("MD"));
        assert_eq!(lexicon.lookup("they"), Some("PRP"));
        assert_eq!(lexicon.lookup("their"), Some("PRP$"));
    }

    #[test]
    fn test_verb_form_lookups() {
        let lexicon = Lexicon::shared();
        assert_eq!(lexicon.lookup("run"), Some("VB"));
        assert_eq!(lexicon.lookup("ran"), Some("VBD"));
        assert_eq!(lexicon.lookup("gone"), Some("VBN"));
        assert_eq!(lexicon.lookup("is"), Some("VBZ"));
        assert_eq!(lexicon.lookup("are"), Some("VBP"));
        assert_eq!(lexicon.lookup("being"), Some("VBG"));
    }

    #[test]
    fn test_clitic_lookups() {
        let lexicon = Lexicon::shared();
        assert_eq!(lexicon.lookup("'s"), Some("POS"));
        assert_eq!(lexicon.lookup("n't"), Some("RB"));
        assert_eq!(lexicon.lookup("'ll"), Some("MD"));
        assert_eq!(lexicon.lookup("'re"), Some("VBP"));
    }

    #[test]
    fn test_open_class_words_absent() {
        let lexicon = Lexicon::shared();
        assert_eq!(lexicon.lookup("dog"), None);
        assert_eq!(lexicon.lookup("xylophone"), None);
    }

    #[test]
    fn test_earlier_table_wins_on_overlap() {
        // "like" is listed both as a preposition and as a verb; the
        // preposition table comes first and keeps priority.
        let lexicon = Lexicon::shared();
        assert_eq!(lexicon.lookup("like"), Some("IN"));
        assert!(lexicon.len() > 200);
    }
}
