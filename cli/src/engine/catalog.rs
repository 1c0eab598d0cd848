//! # Intent Catalog
//!
//! File: cli/src/engine/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An [`Intent`] is a conversational topic: a tag, example phrasings
//! (patterns) and candidate replies. The [`Catalog`] is the ordered list of
//! all intents the engine can pick from. It is assembled once, from the
//! loaded dataset followed by the built-in emotional-support intents, and
//! never changes afterwards.
//!
//! Catalog order is observable: when two intents score the same, the one
//! that comes first wins.
//!
use serde::{Deserialize, Serialize};

/// A labeled topic with example phrasings and candidate replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Unique key used by the emotional override map and follow-up policy.
    pub tag: String,
    /// Example phrasings, used as scoring references.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Candidate replies; one is picked at random.
    #[serde(default)]
    pub responses: Vec<String>,
}

impl Intent {
    pub fn new<T, P, R>(tag: T, patterns: P, responses: R) -> Self
    where
        T: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            tag: tag.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Where a catalog entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Dataset,
    Builtin,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Dataset => write!(f, "dataset"),
            Origin::Builtin => write!(f, "built-in"),
        }
    }
}

/// # Catalog (`Catalog`)
///
/// The ordered, immutable set of intents. Built either from an explicit list
/// ([`Catalog::new`]) or from a dataset with the built-in emotional-support
/// intents appended ([`Catalog::assemble`]).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    intents: Vec<Intent>,
    /// Index of the first built-in intent; everything before it came from
    /// the dataset.
    builtin_start: usize,
}

impl Catalog {
    /// A catalog containing exactly `intents`, in order.
    pub fn new(intents: Vec<Intent>) -> Self {
        let builtin_start = intents.len();
        Self {
            intents,
            builtin_start,
        }
    }

    /// Concatenates `dataset` with the built-in emotional-support intents.
    pub fn assemble(dataset: Vec<Intent>) -> Self {
        let builtin_start = dataset.len();
        let mut intents = dataset;
        intents.extend(builtin_intents());
        Self {
            intents,
            builtin_start,
        }
    }

    /// All intents in catalog order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// The first intent carrying `tag`, if any.
    pub fn find(&self, tag: &str) -> Option<&Intent> {
        self.intents.iter().find(|intent| intent.tag == tag)
    }

    /// Iterates intents together with their origin.
    pub fn entries(&self) -> impl Iterator<Item = (Origin, &Intent)> + '_ {
        self.intents.iter().enumerate().map(move |(i, intent)| {
            let origin = if i < self.builtin_start {
                Origin::Dataset
            } else {
                Origin::Builtin
            };
            (origin, intent)
        })
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// # Built-in Intents (`builtin_intents`)
///
/// The emotional-support intents appended to every assembled catalog. The
/// `feeling_*` tags are the targets of the emotional keyword map.
pub fn builtin_intents() -> Vec<Intent> {
    vec![
        Intent::new(
            "feeling_sad",
            [
                "I feel sad",
                "I'm feeling down",
                "I am depressed",
                "feeling blue",
                "I feel hopeless",
                "I'm not happy",
                "I'm unhappy",
                "I'm feeling low",
            ],
            [
                "I'm sorry to hear you're feeling sad. Remember that it's okay to feel this way sometimes, and your feelings are valid.",
                "It sounds like you're going through a difficult time. Would you like to talk more about what's making you feel this way?",
                "I hear that you're feeling down. Sometimes sharing your feelings can help. Is there someone you trust who you could talk to?",
                "When we feel sad, it can be helpful to practice self-care. Could you do something kind for yourself today?",
            ],
        ),
        Intent::new(
            "feeling_anxious",
            [
                "I'm anxious",
                "I feel nervous",
                "I'm worried",
                "I have anxiety",
                "I'm stressed",
                "I'm panicking",
                "I can't stop worrying",
                "I'm overthinking",
            ],
            [
                "I understand anxiety can be overwhelming. Try taking a few deep breaths - breathe in for 4 counts, hold for 2, and exhale for 6.",
                "Anxiety is a natural response, but it can be difficult to manage. Would it help to talk about what's causing your anxiety?",
                "When you're feeling anxious, grounding exercises can help. Try naming 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste.",
                "It's okay to feel anxious. Remember that this feeling will pass, and you have gotten through difficult moments before.",
            ],
        ),
        Intent::new(
            "feeling_angry",
            [
                "I'm angry",
                "I feel mad",
                "I'm frustrated",
                "I'm irritated",
                "I'm furious",
                "I'm annoyed",
                "I'm upset",
                "I'm enraged",
            ],
            [
                "It's natural to feel angry sometimes. Taking a moment to pause before reacting can be helpful.",
                "I understand you're feeling frustrated. Would it help to talk about what triggered these feelings?",
                "When we're angry, our bodies can feel tense. Try relaxing your shoulders and taking a few deep breaths.",
                "Your feelings are valid. Sometimes writing down why you're angry can help process these emotions.",
            ],
        ),
        Intent::new(
            "feeling_lonely",
            [
                "I'm lonely",
                "I feel alone",
                "I have no friends",
                "nobody understands me",
                "I'm isolated",
                "I have no one to talk to",
                "I feel disconnected",
            ],
            [
                "Feeling lonely can be really difficult. Remember that many people feel this way sometimes, even when surrounded by others.",
                "I'm here to listen. Would you like to talk more about why you're feeling lonely?",
                "Connecting with others, even in small ways, can help with loneliness. Is there someone you could reach out to today?",
                "You're not alone in feeling lonely. Many people are looking for connection too. Would joining a group or community with similar interests help?",
            ],
        ),
        Intent::new(
            "need_help",
            [
                "I need help",
                "help me",
                "I don't know what to do",
                "I'm lost",
                "I need guidance",
                "I need advice",
                "I need support",
            ],
            [
                "I'm here to support you. Can you tell me more about what you need help with?",
                "You're taking a positive step by asking for help. Let's think about this together.",
                "It takes courage to ask for help. Would you like to talk about some specific strategies that might help your situation?",
                "I'm listening and I care about helping you. Let's break down what you're facing into smaller, more manageable parts.",
            ],
        ),
        Intent::new(
            "feeling_better",
            [
                "I feel better",
                "that helps",
                "I'm feeling good",
                "I'm okay now",
                "that made me feel better",
                "thanks for listening",
                "that was helpful",
            ],
            [
                "I'm glad to hear you're feeling better. Remember that your well-being is important.",
                "That's wonderful to hear. Remember that you have the strength to work through difficult feelings.",
                "I'm happy I could help in some way. Remember that you deserve support and care.",
                "That's great! Remember that it's okay to have ups and downs, and to ask for help when you need it.",
            ],
        ),
        Intent::new(
            "gratitude",
            [
                "thank you",
                "thanks",
                "I appreciate it",
                "that's helpful",
                "you're helpful",
                "I'm grateful",
            ],
            [
                "You're welcome! I'm here to support you whenever you need to talk.",
                "I'm glad I could help. Remember that you're not alone in this journey.",
                "It's my pleasure to be here for you. Your mental health matters.",
                "Anytime! Taking care of your mental health is important, and I'm here to help with that.",
            ],
        ),
        Intent::new(
            "greeting",
            [
                "hi",
                "hello",
                "hey",
                "good morning",
                "good afternoon",
                "good evening",
                "howdy",
                "what's up",
            ],
            [
                "Hello! How are you feeling today?",
                "Hi there! I'm here to support you. How can I help?",
                "Hello! How are you doing? I'm here to listen and help.",
                "Hi! How are you feeling? I'm here to chat about mental health and provide support.",
            ],
        ),
        Intent::new(
            "how_are_you",
            [
                "how are you",
                "how are you doing",
                "how are you feeling",
                "are you okay",
                "are you well",
            ],
            [
                "Thanks for asking! I'm here and ready to support you. How are you feeling today?",
                "I'm here and focused on helping you. What's on your mind today?",
                "I'm doing well and I'm here to listen and support you. How are you feeling?",
                "I appreciate your concern! I'm here to help you with whatever you need. How are you doing?",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_intents_are_well_formed() {
        let builtins = builtin_intents();
        assert_eq!(builtins.len(), 9);
        for intent in &builtins {
            assert!(!intent.patterns.is_empty(), "{} has no patterns", intent.tag);
            assert!(!intent.responses.is_empty(), "{} has no responses", intent.tag);
        }
    }

    #[test]
    fn test_assemble_appends_builtins_after_dataset() {
        let dataset = vec![Intent::new("definition", ["what is mental health"], ["An answer."])];
        let catalog = Catalog::assemble(dataset);

        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.intents()[0].tag, "definition");
        assert_eq!(catalog.intents()[1].tag, "feeling_sad");

        let origins: Vec<Origin> = catalog.entries().map(|(origin, _)| origin).collect();
        assert_eq!(origins[0], Origin::Dataset);
        assert!(origins[1..].iter().all(|o| *o == Origin::Builtin));
    }

    #[test]
    fn test_find_returns_first_match() {
        let catalog = Catalog::new(vec![
            Intent::new("greeting", ["hi"], ["first"]),
            Intent::new("greeting", ["hello"], ["second"]),
        ]);
        assert_eq!(catalog.find("greeting").unwrap().responses, vec!["first"]);
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_new_catalog_marks_everything_as_dataset() {
        let catalog = Catalog::new(vec![Intent::new("a", ["x"], ["y"])]);
        assert!(catalog.entries().all(|(origin, _)| origin == Origin::Dataset));
        assert!(Catalog::default().is_empty());
    }
}
