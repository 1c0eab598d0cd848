//! # Carebot Interactive Session
//!
//! File: cli/src/session/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives a full conversation on top of the [`Engine`]: banner, optional
//! name prompt, greeting, then a read-respond loop until the user says
//! goodbye or the input ends.
//!
//! ## Architecture
//!
//! The session is generic over its input (`BufRead`) and output
//! ([`Console`] around any `Write`), so the same loop runs against a real
//! terminal and against in-memory buffers in tests. Randomness comes from
//! the injected [`RandomSource`]. Every turn is appended to a
//! [`Transcript`], which is only used for the end-of-session summary.
//!
//! ```text
//! banner -> name prompt -> greeting -> loop { "You: " -> exit? -> respond -> "Chatbot: ..." }
//! ```
//!
pub mod transcript;

pub use transcript::{Speaker, Transcript, TranscriptSummary, Turn};

use crate::common::ui::{Console, Style};
use crate::core::error::Result;
use crate::engine::{Engine, OverlapScorer, RandomSource, Scorer};
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const NAME_PROMPT: &str = "Your name (or press Enter to skip): ";
pub const USER_PROMPT: &str = "You: ";
pub const BOT_LABEL: &str = "Chatbot: ";

/// Inputs that end the session (compared trimmed and case-insensitively).
pub const EXIT_COMMANDS: [&str; 3] = ["quit", "exit", "bye"];

/// Returns `true` if `input` asks to leave the chat.
pub fn is_exit_command(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    EXIT_COMMANDS.contains(&lowered.as_str())
}

/// The opening line after the name prompt.
pub fn greeting(user_name: Option<&str>) -> String {
    match user_name {
        Some(name) => format!("Nice to meet you, {name}! How are you feeling today?"),
        None => "How are you feeling today?".to_string(),
    }
}

/// The closing line when the user leaves.
pub fn farewell(user_name: Option<&str>) -> String {
    let comma_name = user_name.map(|n| format!(", {n}")).unwrap_or_default();
    format!(
        "Take care of yourself{comma_name}! Remember that seeking support is a sign of strength, not weakness."
    )
}

/// # Chat Session (`ChatSession`)
///
/// One conversation with one user. Borrow the engine and the random source
/// for the session's lifetime; the transcript is owned.
pub struct ChatSession<'a, S = OverlapScorer> {
    engine: &'a Engine<S>,
    rng: &'a mut dyn RandomSource,
    user_name: Option<String>,
    transcript: Transcript,
}

impl<'a, S: Scorer> ChatSession<'a, S> {
    pub fn new(engine: &'a Engine<S>, rng: &'a mut dyn RandomSource) -> Self {
        Self {
            engine,
            rng,
            user_name: None,
            transcript: Transcript::new(),
        }
    }

    /// Presets the user's name. The name prompt is skipped when a non-empty
    /// name is given.
    pub fn with_user_name(mut self, name: Option<String>) -> Self {
        self.user_name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// # Run Session (`run`)
    ///
    /// Runs the conversation to completion. Returns once the user typed an
    /// exit command or `input` reached end of file; in both cases the
    /// farewell is printed. Only I/O failures are errors.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        console: &mut Console<W>,
    ) -> Result<()> {
        print_banner(console)?;

        if self.user_name.is_none() {
            console.line(
                Style::Info,
                "To make our conversation more personal, may I know your name?",
            )?;
            console.prompt(NAME_PROMPT)?;
            if let Some(line) = read_line(&mut input)? {
                let name = line.trim();
                if !name.is_empty() {
                    self.user_name = Some(name.to_string());
                }
            }
        }
        debug!(user_name = ?self.user_name, "session started");

        let opening = greeting(self.user_name.as_deref());
        console.type_line(Style::Info, &opening)?;
        self.transcript.push_bot(opening, None);

        loop {
            console.prompt(USER_PROMPT)?;
            let Some(line) = read_line(&mut input)? else {
                debug!("input closed; ending session");
                console.line(Style::Info, "")?;
                self.say_goodbye(console)?;
                break;
            };

            let text = line.trim();
            self.transcript.push_user(text);

            if is_exit_command(text) {
                self.say_goodbye(console)?;
                break;
            }

            let reply = self
                .engine
                .respond(text, self.user_name.as_deref(), &mut *self.rng);
            debug!(route = %reply.route, "reply composed");
            console.type_line(Style::Info, &format!("{BOT_LABEL}{}", reply.text))?;
            self.transcript.push_bot(reply.text, Some(reply.route));
        }

        let summary = self.transcript.summary();
        info!(
            user_turns = summary.user_turns,
            bot_turns = summary.bot_turns,
            dominant_topic = ?summary.dominant_topic,
            "session ended"
        );
        Ok(())
    }

    fn say_goodbye<W: Write>(&mut self, console: &mut Console<W>) -> Result<()> {
        let text = farewell(self.user_name.as_deref());
        console.type_line(Style::Info, &format!("{BOT_LABEL}{text}"))?;
        self.transcript.push_bot(text, None);
        Ok(())
    }
}

fn print_banner<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.rule()?;
    console.line(Style::Heading, "Welcome to the Mental Health Support Chatbot")?;
    console.line(
        Style::Info,
        "I'm here to provide information and emotional support.",
    )?;
    console.line(
        Style::Info,
        "You can share how you're feeling, ask questions about mental health,",
    )?;
    console.line(Style::Info, "or just chat if you need someone to talk to.")?;
    console.line(Style::Hint, "Type 'quit' to exit")?;
    console.rule()?;
    Ok(())
}

/// Reads one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    let read = input
        .read_line(&mut buf)
        .context("Failed to read from input")?;
    Ok((read > 0).then_some(buf))
}
