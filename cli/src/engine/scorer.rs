//! # Overlap Scorer
//!
//! File: cli/src/engine/scorer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! When no emotional keyword fires, every intent in the catalog is scored by
//! how much the input overlaps its example patterns, and the best intent is
//! selected if it clears the threshold.
//!
//! ## Scoring
//!
//! For each pattern of an intent, count the input tokens (every occurrence)
//! that appear in the pattern's normalized token set. Counts add up across
//! all patterns of the intent, so intents with many overlapping examples are
//! rewarded. The raw count is divided by the number of input tokens; an empty
//! input scores 0 everywhere.
//!
//! The best intent is tracked with a strict `>` comparison, so on a tie the
//! earlier catalog entry wins.
//!
use super::catalog::{Catalog, Intent};
use super::normalizer::Normalizer;
use super::policy::clears_threshold;
use std::collections::HashSet;
use tracing::trace;

/// An intent that cleared the selection threshold, with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch<'c> {
    pub intent: &'c Intent,
    pub score: f64,
}

/// Selects the best intent for a normalized input.
pub trait Scorer {
    fn select<'c>(&self, tokens: &[String], catalog: &'c Catalog) -> Option<ScoredMatch<'c>>;
}

/// # Overlap Scorer (`OverlapScorer`)
///
/// The default [`Scorer`]: pattern-overlap counting normalized by input
/// length, with a strict selection threshold.
#[derive(Debug, Clone)]
pub struct OverlapScorer {
    normalizer: Normalizer,
    threshold: f64,
}

impl OverlapScorer {
    pub fn new(threshold: f64) -> Self {
        Self {
            normalizer: Normalizer::new(),
            threshold,
        }
    }

    /// # Score Intent (`score_intent`)
    ///
    /// The normalized overlap score of `intent` for `tokens`:
    /// `raw_count / tokens.len()`, or `0.0` when `tokens` is empty.
    pub fn score_intent(&self, tokens: &[String], intent: &Intent) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let raw: usize = intent
            .patterns
            .iter()
            .map(|pattern| {
                let pattern_tokens: HashSet<String> =
                    self.normalizer.normalize(pattern).into_iter().collect();
                tokens
                    .iter()
                    .filter(|token| pattern_tokens.contains(*token))
                    .count()
            })
            .sum();
        raw as f64 / tokens.len() as f64
    }
}

impl Scorer for OverlapScorer {
    fn select<'c>(&self, tokens: &[String], catalog: &'c Catalog) -> Option<ScoredMatch<'c>> {
        let mut best: Option<ScoredMatch<'c>> = None;
        let mut highest = 0.0;

        for intent in catalog.intents() {
            let score = self.score_intent(tokens, intent);
            trace!(tag = %intent.tag, score, "scored intent");
            if score > highest {
                highest = score;
                best = Some(ScoredMatch { intent, score });
            }
        }

        best.filter(|m| clears_threshold(m.score, self.threshold))
    }
}
