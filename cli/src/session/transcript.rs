//! # Session Transcript
//!
//! File: cli/src/session/transcript.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An append-only record of the conversation. The engine never reads it;
//! the transcript only feeds the end-of-session summary (turn counts, how
//! each reply was produced and the topic that came up most often).
//!
use crate::engine::Route;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fmt;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// One line of the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Local>,
    /// How the reply was produced; `None` for user turns.
    pub route: Option<Route>,
}

/// # Transcript (`Transcript`)
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn {
            speaker: Speaker::User,
            text: text.into(),
            at: Local::now(),
            route: None,
        });
    }

    pub fn push_bot(&mut self, text: impl Into<String>, route: Option<Route>) {
        self.turns.push(Turn {
            speaker: Speaker::Bot,
            text: text.into(),
            at: Local::now(),
            route,
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// # Summary (`summary`)
    ///
    /// Counts turns per speaker and replies per route, and finds the
    /// dominant topic: the intent tag behind the most replies. On a tie the
    /// tag that came up first wins.
    pub fn summary(&self) -> TranscriptSummary {
        let mut summary = TranscriptSummary::default();
        // (tag, count) in order of first appearance.
        let mut topics: Vec<(&str, usize)> = Vec::new();

        for turn in &self.turns {
            match turn.speaker {
                Speaker::User => summary.user_turns += 1,
                Speaker::Bot => summary.bot_turns += 1,
            }
            let Some(route) = &turn.route else {
                continue;
            };
            *summary.routes.entry(route.label()).or_insert(0) += 1;
            if let Some(tag) = route.tag() {
                match topics.iter_mut().find(|(t, _)| *t == tag) {
                    Some((_, count)) => *count += 1,
                    None => topics.push((tag, 1)),
                }
            }
        }

        let mut dominant: Option<(&str, usize)> = None;
        for &(tag, count) in &topics {
            if dominant.map_or(true, |(_, best)| count > best) {
                dominant = Some((tag, count));
            }
        }
        summary.dominant_topic = dominant.map(|(tag, _)| tag.to_string());
        summary
    }
}

/// Aggregate view of a finished (or ongoing) session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptSummary {
    pub user_turns: usize,
    pub bot_turns: usize,
    /// Reply count per route label (`override`, `scored`, ...).
    pub routes: BTreeMap<&'static str, usize>,
    pub dominant_topic: Option<String>,
}

impl fmt::Display for TranscriptSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Session summary:")?;
        writeln!(f, "  Your messages:   {}", self.user_turns)?;
        writeln!(f, "  Chatbot replies: {}", self.bot_turns)?;
        for (label, count) in &self.routes {
            writeln!(f, "    {label:<11} {count}")?;
        }
        write!(
            f,
            "  Main topic:      {}",
            self.dominant_topic.as_deref().unwrap_or("none")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(tag: &str) -> Option<Route> {
        Some(Route::Scored {
            tag: tag.to_string(),
            score: 1.0,
        })
    }

    #[test]
    fn test_empty_transcript_summary() {
        let summary = Transcript::new().summary();
        assert_eq!(summary, TranscriptSummary::default());
        assert!(summary.to_string().ends_with("Main topic:      none"));
    }

    #[test]
    fn test_turns_are_appended_in_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        transcript.push_bot("Hello!", scored("greeting"));

        let turns = transcript.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, Speaker::User);
        assert_eq!(turns[0].route, None);
        assert_eq!(turns[1].speaker, Speaker::Bot);
        assert!(turns[0].at <= turns[1].at);
    }

    #[test]
    fn test_summary_counts_routes_and_topic() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        transcript.push_bot("Hello!", scored("greeting"));
        transcript.push_user("I feel sad");
        transcript.push_bot(
            "I'm sorry.",
            Some(Route::Override {
                tag: "feeling_sad".into(),
            }),
        );
        transcript.push_user("so sad");
        transcript.push_bot(
            "I hear you.",
            Some(Route::Override {
                tag: "feeling_sad".into(),
            }),
        );
        transcript.push_user("qwerty");
        transcript.push_bot("Sorry?", Some(Route::Apology));

        let summary = transcript.summary();
        assert_eq!(summary.user_turns, 4);
        assert_eq!(summary.bot_turns, 4);
        assert_eq!(summary.routes.get("override"), Some(&2));
        assert_eq!(summary.routes.get("scored"), Some(&1));
        assert_eq!(summary.routes.get("apology"), Some(&1));
        assert_eq!(summary.routes.get("disclosure"), None);
        assert_eq!(summary.dominant_topic.as_deref(), Some("feeling_sad"));
    }

    #[test]
    fn test_topic_tie_goes_to_first_seen() {
        let mut transcript = Transcript::new();
        transcript.push_bot("a", scored("gratitude"));
        transcript.push_bot("b", scored("greeting"));
        assert_eq!(
            transcript.summary().dominant_topic.as_deref(),
            Some("gratitude")
        );
    }

    #[test]
    fn test_bot_turns_without_route_are_counted() {
        let mut transcript = Transcript::new();
        transcript.push_bot("How are you feeling today?", None);
        let summary = transcript.summary();
        assert_eq!(summary.bot_turns, 1);
        assert!(summary.routes.is_empty());
        assert_eq!(summary.dominant_topic, None);
    }
}
