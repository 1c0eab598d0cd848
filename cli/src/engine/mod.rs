//! # Carebot Matching Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The engine turns one line of user input into one reply. It is pure and
//! synchronous: no I/O, no shared mutable state, and every input produces a
//! reply. Randomness is injected by the caller through a [`RandomSource`].
//!
//! ## Architecture
//!
//! ```text
//! raw input -> Normalizer -> EmotionalKeywordMap --hit--> Composer (override)
//!                                   |
//!                                  miss
//!                                   v
//!                                Scorer --------------> Composer (scored / fallback)
//! ```
//!
//! - `normalizer`: lowercasing, tokenization, lemmatization
//! - `catalog`: intents and the built-in emotional-support set
//! - `emotion`: keyword override, checked before scoring
//! - `scorer`: pattern-overlap scoring and selection
//! - `composer`: response choice, personalization, fallbacks
//! - `policy`: threshold, probabilities and fixed phrase lists
//! - `random`: the injectable random source
//!
//! ## Examples
//!
//! ```rust
//! use carebot::engine::{Catalog, Engine, FixedSource, MatchPolicy};
//!
//! let engine = Engine::new(Catalog::assemble(Vec::new()), MatchPolicy::default());
//! let reply = engine.respond("I feel sad", None, &mut FixedSource::default());
//! assert_eq!(reply.route.tag(), Some("feeling_sad"));
//! ```
//!
pub mod catalog;
pub mod composer;
pub mod emotion;
pub mod normalizer;
pub mod policy;
pub mod random;
pub mod scorer;

pub use catalog::{Catalog, Intent, Origin};
pub use composer::{Reply, Route, Selection};
pub use emotion::EmotionalKeywordMap;
pub use normalizer::Normalizer;
pub use policy::MatchPolicy;
pub use random::{FixedSource, RandomSource, RngSource};
pub use scorer::{OverlapScorer, ScoredMatch, Scorer};

use tracing::{debug, warn};

/// # Engine (`Engine`)
///
/// Owns the immutable catalog, keyword map, scorer and policy. Shareable
/// across threads for reading; `respond` takes `&self`.
#[derive(Debug, Clone)]
pub struct Engine<S = OverlapScorer> {
    catalog: Catalog,
    normalizer: Normalizer,
    emotions: EmotionalKeywordMap,
    scorer: S,
    policy: MatchPolicy,
}

impl Engine {
    /// An engine with the default overlap scorer, using the policy's
    /// selection threshold.
    pub fn new(catalog: Catalog, policy: MatchPolicy) -> Self {
        let scorer = OverlapScorer::new(policy.selection_threshold);
        Engine::with_scorer(catalog, policy, scorer)
    }
}

impl<S: Scorer> Engine<S> {
    /// An engine with a custom scorer.
    pub fn with_scorer(catalog: Catalog, policy: MatchPolicy, scorer: S) -> Self {
        Self {
            catalog,
            normalizer: Normalizer::new(),
            emotions: EmotionalKeywordMap::default(),
            scorer,
            policy,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// # Select (`select`)
    ///
    /// Runs the override check and, if it misses, the scorer. An override
    /// whose tag has no usable intent in the catalog falls through to
    /// scoring.
    pub fn select(&self, tokens: &[String]) -> Selection<'_> {
        if let Some(tag) = self.emotions.match_emotion(tokens) {
            match self.catalog.find(tag) {
                Some(intent) if !intent.responses.is_empty() => {
                    debug!(tag, "emotional keyword override");
                    return Selection::Override(intent);
                }
                _ => warn!(
                    tag,
                    "emotional keyword matched but the catalog has no usable intent for it"
                ),
            }
        }

        match self.scorer.select(tokens, &self.catalog) {
            Some(scored) => {
                debug!(tag = %scored.intent.tag, score = scored.score, "intent selected");
                Selection::Scored(scored)
            }
            None => {
                debug!("no intent cleared the selection threshold");
                Selection::NoMatch
            }
        }
    }

    /// # Respond (`respond`)
    ///
    /// Produces the reply for one raw input line. `user_name` is the
    /// optional display name used for personalization.
    pub fn respond(
        &self,
        input: &str,
        user_name: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> Reply {
        let tokens = self.normalizer.normalize(input);
        debug!(?tokens, "normalized input");
        let selection = self.select(&tokens);
        composer::compose(&selection, input, user_name, &self.policy, rng)
    }
}
