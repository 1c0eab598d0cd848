//! # Matching Policy
//!
//! File: cli/src/engine/policy.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The numbers and fixed phrase lists that shape how a reply is chosen. They
//! are exposed as named constants so the scoring policy stays inspectable, and
//! gathered into [`MatchPolicy`] so configuration can override the tunable
//! ones without touching the engine.
//!

/// A best score must be strictly greater than this to select an intent.
pub const SELECTION_THRESHOLD: f64 = 0.2;

/// Chance of prefixing the user's name on a scored-match reply.
pub const NAME_PREPEND_PROBABILITY: f64 = 0.3;

/// Chance of appending a follow-up question to a follow-up eligible reply.
pub const FOLLOW_UP_PROBABILITY: f64 = 0.5;

/// Informational tags whose replies may receive a follow-up question.
pub const FOLLOW_UP_TAGS: &[&str] = &["definition", "affects_whom", "what_causes"];

/// Generic follow-up questions appended after informational replies.
pub const FOLLOW_UP_QUESTIONS: [&str; 4] = [
    "Would you like to know more about this topic?",
    "Is there anything specific about this that concerns you?",
    "How does this information make you feel?",
    "Do you have any other questions about this?",
];

/// First-person phrases that mark an unmatched input as personal sharing.
/// Checked in order against the raw lowercase input.
pub const DISCLOSURE_PHRASES: [&str; 5] = ["i feel", "i am", "i'm", "i've been", "i have been"];

/// # Match Policy (`MatchPolicy`)
///
/// The tunable part of the matching policy. `Default` yields the built-in
/// constants above; `core::config` builds one from the `[engine]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPolicy {
    /// Scores must be strictly greater than this to select an intent.
    pub selection_threshold: f64,
    /// Probability of name personalization on the scored path.
    pub name_prepend_probability: f64,
    /// Probability of a follow-up question for eligible tags.
    pub follow_up_probability: f64,
    /// Tags eligible for a follow-up question.
    pub follow_up_tags: Vec<String>,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            selection_threshold: SELECTION_THRESHOLD,
            name_prepend_probability: NAME_PREPEND_PROBABILITY,
            follow_up_probability: FOLLOW_UP_PROBABILITY,
            follow_up_tags: FOLLOW_UP_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Returns `true` when `score` is high enough to select an intent under
/// `threshold`. The comparison is strict: a score equal to the threshold is
/// rejected.
pub fn clears_threshold(score: f64, threshold: f64) -> bool {
    score > threshold
}

impl MatchPolicy {
    /// Returns `true` if replies for `tag` may receive a follow-up question.
    pub fn wants_follow_up(&self, tag: &str) -> bool {
        self.follow_up_tags.iter().any(|t| t == tag)
    }
}
