//! # Emotional Override Matcher
//!
//! File: cli/src/engine/emotion.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A handful of strong affect words always route to a specific
//! emotional-support intent, no matter what else the input says. "I had a
//! bad headache and feel sad" must reach `feeling_sad` even if `headache`
//! overlaps more with another intent, so this check runs before scoring and
//! bypasses it entirely on a hit.
//!
use std::collections::HashMap;

/// Normalized keyword -> intent tag.
pub const EMOTIONAL_KEYWORDS: &[(&str, &str)] = &[
    ("sad", "feeling_sad"),
    ("depressed", "feeling_sad"),
    ("unhappy", "feeling_sad"),
    ("down", "feeling_sad"),
    ("anxious", "feeling_anxious"),
    ("nervous", "feeling_anxious"),
    ("worried", "feeling_anxious"),
    ("stress", "feeling_anxious"),
    ("angry", "feeling_angry"),
    ("mad", "feeling_angry"),
    ("frustrated", "feeling_angry"),
    ("lonely", "feeling_lonely"),
    ("alone", "feeling_lonely"),
    ("isolated", "feeling_lonely"),
];

/// # Emotional Keyword Map (`EmotionalKeywordMap`)
///
/// Fixed mapping from a lowercase base-form word to an intent tag.
#[derive(Debug, Clone)]
pub struct EmotionalKeywordMap {
    keywords: HashMap<&'static str, &'static str>,
}

impl Default for EmotionalKeywordMap {
    fn default() -> Self {
        Self::from_pairs(EMOTIONAL_KEYWORDS)
    }
}

impl EmotionalKeywordMap {
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            keywords: pairs.iter().copied().collect(),
        }
    }

    /// # Match Emotion (`match_emotion`)
    ///
    /// Returns the tag mapped to the first token (in input order) that is a
    /// keyword, or `None` if no token is.
    pub fn match_emotion<S: AsRef<str>>(&self, tokens: &[S]) -> Option<&'static str> {
        tokens
            .iter()
            .find_map(|token| self.keywords.get(token.as_ref()).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_keyword_in_input_order_wins() {
        let map = EmotionalKeywordMap::default();
        assert_eq!(
            map.match_emotion(&["i", "feel", "lonely", "and", "sad"]),
            Some("feeling_lonely")
        );
        assert_eq!(
            map.match_emotion(&["sad", "and", "lonely"]),
            Some("feeling_sad")
        );
    }

    #[test]
    fn test_keyword_found_regardless_of_surroundings() {
        let map = EmotionalKeywordMap::default();
        for &(keyword, tag) in EMOTIONAL_KEYWORDS {
            let tokens = vec!["i", "had", "a", "bad", "headache", keyword, "today"];
            assert_eq!(map.match_emotion(&tokens), Some(tag));
        }
    }

    #[test]
    fn test_no_keyword() {
        let map = EmotionalKeywordMap::default();
        assert_eq!(map.match_emotion(&["hello", "there"]), None);
        assert_eq!(map.match_emotion::<&str>(&[]), None);
        // Matching is on exact base forms only.
        assert_eq!(map.match_emotion(&["stressed", "sadness"]), None);
    }
}
