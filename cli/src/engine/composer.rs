//! # Response Composer
//!
//! File: cli/src/engine/composer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a [`Selection`] into the final reply text. There are three
//! mutually exclusive paths:
//!
//! 1. **Override**: an emotional keyword fired. A random response of the
//!    matched intent is personalized with the user's name: the first
//!    `you're` becomes `<name>, you're`, and if neither the name nor `you`
//!    appears afterwards, the name is prepended.
//! 2. **Scored**: an intent cleared the threshold. The name is prepended
//!    with some probability (only if neither the name nor `you` appears),
//!    and informational intents may get a follow-up question appended.
//! 3. **Fallback**: nothing matched. Inputs that look like personal sharing
//!    (`i feel`, `i'm`, ...) get an empathetic acknowledgment, anything else
//!    gets an apology asking the user to rephrase.
//!
//! The personalization is a literal substring heuristic, not a grammar-aware
//! rewrite.
//!
use super::catalog::Intent;
use super::policy::{MatchPolicy, DISCLOSURE_PHRASES, FOLLOW_UP_QUESTIONS};
use super::random::{choose, RandomSource};
use super::scorer::ScoredMatch;
use std::fmt;

/// What the matcher decided for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'c> {
    /// An emotional keyword routed straight to this intent.
    Override(&'c Intent),
    /// The scorer picked this intent.
    Scored(ScoredMatch<'c>),
    /// Nothing cleared the threshold.
    NoMatch,
}

/// Which path produced a reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Override { tag: String },
    Scored { tag: String, score: f64 },
    Disclosure,
    Apology,
}

impl Route {
    /// Short lowercase name of the path.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Override { .. } => "override",
            Route::Scored { .. } => "scored",
            Route::Disclosure => "disclosure",
            Route::Apology => "apology",
        }
    }

    /// The intent tag behind the reply, if an intent was used.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Route::Override { tag } | Route::Scored { tag, .. } => Some(tag.as_str()),
            Route::Disclosure | Route::Apology => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Override { tag } => write!(f, "override -> {tag}"),
            Route::Scored { tag, score } => write!(f, "scored -> {tag} (score {score:.2})"),
            Route::Disclosure => write!(f, "fallback (personal sharing)"),
            Route::Apology => write!(f, "fallback (not understood)"),
        }
    }
}

/// The reply text together with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub route: Route,
}

/// # Compose Reply (`compose`)
///
/// Builds the reply for `selection`. `raw_input` is the unnormalized user
/// text (used by the fallback path) and `user_name` the optional display
/// name; an empty name counts as no name.
///
/// Never fails: an intent without responses degrades to the fallback path.
pub fn compose(
    selection: &Selection<'_>,
    raw_input: &str,
    user_name: Option<&str>,
    policy: &MatchPolicy,
    rng: &mut dyn RandomSource,
) -> Reply {
    let name = user_name.filter(|n| !n.is_empty());

    match selection {
        Selection::Override(intent) => match choose(rng, &intent.responses) {
            Some(response) => {
                let text = match name {
                    Some(name) => personalize(response, name),
                    None => response.clone(),
                };
                Reply {
                    text,
                    route: Route::Override {
                        tag: intent.tag.clone(),
                    },
                }
            }
            None => fallback(raw_input, name, rng),
        },
        Selection::Scored(scored) => match choose(rng, &scored.intent.responses) {
            Some(response) => {
                let mut text = response.clone();
                if let Some(name) = name {
                    if rng.roll(policy.name_prepend_probability) && !mentions_user(&text, name) {
                        text = prepend_name(&text, name);
                    }
                }
                if policy.wants_follow_up(&scored.intent.tag)
                    && rng.roll(policy.follow_up_probability)
                {
                    if let Some(question) = choose(rng, &FOLLOW_UP_QUESTIONS) {
                        text.push(' ');
                        text.push_str(question);
                    }
                }
                Reply {
                    text,
                    route: Route::Scored {
                        tag: scored.intent.tag.clone(),
                        score: scored.score,
                    },
                }
            }
            None => fallback(raw_input, name, rng),
        },
        Selection::NoMatch => fallback(raw_input, name, rng),
    }
}

/// # Personalize (`personalize`)
///
/// The override-path name heuristic: replace the first `you're` with
/// `<name>, you're`; if the result mentions neither the name nor `you`,
/// prepend the name instead.
pub fn personalize(response: &str, name: &str) -> String {
    let replaced = response.replacen("you're", &format!("{name}, you're"), 1);
    if mentions_user(&replaced, name) {
        replaced
    } else {
        prepend_name(&replaced, name)
    }
}

/// `<name>, ` followed by the response with its first letter lowercased.
pub fn prepend_name(response: &str, name: &str) -> String {
    let mut chars = response.chars();
    match chars.next() {
        Some(first) => format!("{name}, {}{}", first.to_lowercase(), chars.as_str()),
        None => format!("{name}, "),
    }
}

fn mentions_user(response: &str, name: &str) -> bool {
    response.contains(name) || response.contains("you")
}

/// The four empathetic acknowledgments used for personal sharing.
pub fn disclosure_responses(user_name: Option<&str>) -> [String; 4] {
    let comma_name = user_name
        .map(|n| format!(", {n}"))
        .unwrap_or_default();
    let to_me_name = user_name
        .map(|n| format!(" to me, {n}"))
        .unwrap_or_default();
    [
        format!("Thank you for sharing that with me{comma_name}. I'm here to listen."),
        format!("I appreciate you opening up{to_me_name}. Would you like to talk more about it?"),
        format!("That sounds challenging{comma_name}. How long have you been feeling this way?"),
        format!("I'm here for you{comma_name}. Would it help to talk more about what you're experiencing?"),
    ]
}

/// The reply used when nothing matched and the input is not personal sharing.
pub fn apology(user_name: Option<&str>) -> String {
    let comma_name = user_name
        .map(|n| format!(", {n}"))
        .unwrap_or_default();
    format!(
        "I'm sorry{comma_name}, I don't quite understand. Could you rephrase your question about mental health?"
    )
}

/// Returns `true` if the raw input contains one of the disclosure phrases.
pub fn is_personal_sharing(raw_input: &str) -> bool {
    let lowered = raw_input.to_lowercase();
    DISCLOSURE_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

fn fallback(raw_input: &str, name: Option<&str>, rng: &mut dyn RandomSource) -> Reply {
    if is_personal_sharing(raw_input) {
        let templates = disclosure_responses(name);
        if let Some(text) = choose(rng, &templates) {
            return Reply {
                text: text.clone(),
                route: Route::Disclosure,
            };
        }
    }
    Reply {
        text: apology(name),
        route: Route::Apology,
    }
}
