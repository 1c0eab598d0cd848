//! # Text Normalizer
//!
//! File: cli/src/engine/normalizer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns free text into the token sequence every other matching step works
//! on. Both user input and intent patterns go through the same pipeline, so
//! what matters most is that the pipeline is deterministic and consistent,
//! not that every lemma is dictionary-perfect.
//!
//! ## Pipeline
//!
//! 1. Lowercase the whole input (curly apostrophes become `'`).
//! 2. Split on Unicode word boundaries (`unicode-segmentation`). Segments
//!    without any alphanumeric character (punctuation, spaces, emoji) are
//!    dropped.
//! 3. Split English contractions the Treebank way: `i'm` becomes `i`, `'m`
//!    and `don't` becomes `do`, `n't`.
//! 4. Reduce every token to a base form with a [`Lemmatizer`]. The default
//!    [`NounLemmatizer`] reduces plural noun forms and leaves everything
//!    else alone.
//!
//! ## Examples
//!
//! ```rust
//! use carebot::engine::normalizer::Normalizer;
//!
//! let tokens = Normalizer::new().normalize("I'm having panic attacks!");
//! assert_eq!(tokens, vec!["i", "'m", "having", "panic", "attack"]);
//! ```
//!
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Clitic suffixes split off the word they are attached to.
const CONTRACTION_SUFFIXES: [&str; 6] = ["'s", "'m", "'d", "'ll", "'re", "'ve"];

/// The negation clitic, split off as its own token (`can't` -> `ca`, `n't`).
const NEGATION_SUFFIX: &str = "n't";

/// Plurals that suffix rules would get wrong.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("movies", "movie"),
    ("cookies", "cookie"),
];

/// Words ending in `s` that are already in base form.
const INVARIANT_WORDS: &[&str] = &[
    "always",
    "does",
    "means",
    "news",
    "ourselves",
    "perhaps",
    "series",
    "sometimes",
    "species",
    "thanks",
    "themselves",
    "whereas",
    "yourselves",
];

/// Plural suffix rewrites, tried in order. The first rule whose remaining
/// stem has at least two characters wins.
const SUFFIX_RULES: &[(&str, &str)] = &[("ies", "y"), ("sses", "ss"), ("xes", "x"), ("s", "")];

/// Reduces a single lowercase token to its base form.
pub trait Lemmatizer {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// # Noun Lemmatizer (`NounLemmatizer`)
///
/// A rule-based English lemmatizer that only knows noun inflection: it maps
/// plural forms to singular and returns every other word unchanged. Verbs,
/// adjectives and adverbs (`worried`, `feeling`, `stressed`) pass through,
/// which is what keyword matching on affect words relies on.
///
/// Applying it twice gives the same result as applying it once.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounLemmatizer;

impl Lemmatizer for NounLemmatizer {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.chars().count() <= 3 || !word.chars().all(char::is_alphabetic) {
            return Cow::Borrowed(word);
        }
        if let Some(base) = irregular_base(word) {
            return Cow::Owned(base.to_string());
        }
        if INVARIANT_WORDS.contains(&word)
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
        {
            return Cow::Borrowed(word);
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.chars().count() >= 2 {
                    let base = format!("{stem}{replacement}");
                    // `childrens` -> `children` -> `child` in one step.
                    return match irregular_base(&base) {
                        Some(irregular) => Cow::Owned(irregular.to_string()),
                        None => Cow::Owned(base),
                    };
                }
            }
        }
        Cow::Borrowed(word)
    }
}

fn irregular_base(word: &str) -> Option<&'static str> {
    IRREGULAR_PLURALS
        .iter()
        .find(|(plural, _)| *plural == word)
        .map(|(_, base)| *base)
}

/// # Normalizer (`Normalizer`)
///
/// Lowercases, tokenizes and lemmatizes text. Cheap to construct and to
/// clone; holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct Normalizer<L = NounLemmatizer> {
    lemmatizer: L,
}

impl Normalizer {
    /// A normalizer using the default [`NounLemmatizer`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: Lemmatizer> Normalizer<L> {
    /// A normalizer using a custom lemmatizer. This is the extension point
    /// for callers that want a different base-form strategy.
    ///
    /// ```rust
    /// use carebot::engine::normalizer::{Lemmatizer, Normalizer};
    /// use std::borrow::Cow;
    ///
    /// struct Identity;
    ///
    /// impl Lemmatizer for Identity {
    ///     fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
    ///         Cow::Borrowed(word)
    ///     }
    /// }
    ///
    /// let tokens = Normalizer::with_lemmatizer(Identity).normalize("Panic attacks");
    /// assert_eq!(tokens, vec!["panic", "attacks"]);
    /// ```
    pub fn with_lemmatizer(lemmatizer: L) -> Self {
        Self { lemmatizer }
    }

    /// # Normalize Text (`normalize`)
    ///
    /// Returns the ordered base-form tokens of `text`. Empty, whitespace-only
    /// and punctuation-only input all yield an empty vector.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .map(|token| self.lemmatizer.lemmatize(&token).into_owned())
            .collect()
    }
}

/// # Tokenize (`tokenize`)
///
/// Lowercases `text` and splits it into word tokens, dropping punctuation
/// and splitting contractions. No lemmatization happens here.
///
/// A lone apostrophe directly followed by a clitic (`'m`, `'s`, ...) is kept
/// attached to it, so re-tokenizing already tokenized text (`i 'm`) is
/// stable.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    let mut tokens = Vec::new();
    let mut after_apostrophe = false;

    for segment in lowered.split_word_bounds() {
        if segment == "'" {
            after_apostrophe = true;
            continue;
        }
        if !segment.chars().any(char::is_alphanumeric) {
            after_apostrophe = false;
            continue;
        }

        let clitic = format!("'{segment}");
        if after_apostrophe && CONTRACTION_SUFFIXES.contains(&clitic.as_str()) {
            tokens.push(clitic);
        } else {
            split_contraction(segment, &mut tokens);
        }
        after_apostrophe = false;
    }

    tokens
}

/// Pushes `word` onto `tokens`, splitting off a trailing clitic if present.
fn split_contraction(word: &str, tokens: &mut Vec<String>) {
    if let Some(stem) = word.strip_suffix(NEGATION_SUFFIX) {
        if !stem.is_empty() {
            tokens.push(stem.to_string());
            tokens.push(NEGATION_SUFFIX.to_string());
            return;
        }
    }
    for suffix in CONTRACTION_SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix) {
            if !stem.is_empty() {
                tokens.push(stem.to_string());
                tokens.push(suffix.to_string());
                return;
            }
        }
    }
    tokens.push(word.to_string());
}
