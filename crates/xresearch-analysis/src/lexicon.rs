//! Fixed word lists used by keyword extraction and sentiment scoring.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English function words plus common X noise. Dropped from keyword counts.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "shall", "can", "to", "of", "in", "for",
    "on", "with", "at", "by", "from", "as", "into", "through", "during",
    "before", "after", "above", "below", "between", "out", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when",
    "where", "why", "how", "all", "both", "each", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same",
    "so", "than", "too", "very", "just", "about", "up", "it", "its",
    "this", "that", "these", "those", "i", "me", "my", "we", "our",
    "you", "your", "he", "him", "his", "she", "her", "they", "them",
    "their", "what", "which", "who", "whom", "and", "but", "or", "if",
    "while", "because", "until", "although", "since", "unless", "also",
    "get", "got", "like", "know", "think", "see", "come", "make", "go",
    "good", "new", "first", "last", "long", "great", "little", "right",
    "big", "high", "old", "different", "small", "even", "much", "way",
    "many", "well", "back", "still", "us", "really", "amp", "rt", "via",
    "one", "two", "three", "don", "t", "s", "re", "ve", "ll", "m", "d",
];

/// Terms counted as positive when found anywhere inside lowercased post text.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "love", "amazing", "awesome", "great", "excellent", "fantastic", "perfect",
    "incredible", "brilliant", "beautiful", "impressive", "outstanding", "wonderful",
    "best", "happy", "excited", "powerful", "innovative", "game-changer", "breakthrough",
    "revolutionary", "insane", "fire", "goat", "bullish", "based", "peak",
    "upgrade", "improved", "fast", "easy", "clean", "solid", "shipped",
];

/// Terms counted as negative when found anywhere inside lowercased post text.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "hate", "terrible", "awful", "horrible", "worst", "bad", "broken",
    "disappointing", "frustrated", "annoying", "useless", "slow", "buggy",
    "trash", "garbage", "scam", "overrated", "downgrade", "regression",
    "nightmare", "bearish", "dead", "dying", "failed", "crash", "disaster",
    "missing", "lacking", "poor", "weak", "concern", "worried", "issue",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Lexicon terms contained in `lowered` as substrings, in lexicon order.
///
/// Matching is deliberately substring-based: "fast" matches inside
/// "breakfast". Callers must lowercase the text first.
#[must_use]
pub fn matched_terms<'a>(lexicon: &'a [&'a str], lowered: &str) -> Vec<&'a str> {
    lexicon
        .iter()
        .copied()
        .filter(|term| lowered.contains(term))
        .collect()
}
