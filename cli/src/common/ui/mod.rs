//! # Carebot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A small wrapper around any `Write` sink that knows how to print styled
//! lines for the chat session:
//!
//! - Bright cyan banner rules, bright green headings and prompts, cyan
//!   informational text and yellow hints.
//! - Color can be switched off entirely (`--no-color`, `[display] color`),
//!   in which case only the plain text is written.
//! - Bot replies can be "typed" one character at a time with a fixed delay
//!   between characters. A zero delay writes the line in one go.
//!
//! ## Examples
//!
//! ```rust
//! use carebot::common::ui::{Console, Style};
//! use std::time::Duration;
//!
//! let mut console = Console::new(Vec::new(), false, Duration::ZERO);
//! console.line(Style::Info, "How are you feeling today?").unwrap();
//! assert_eq!(console.into_inner(), b"How are you feeling today?\n");
//! ```
//!
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const BANNER_START: &str = "\x1b[1;96m";
const HEADING_START: &str = "\x1b[1;92m";
const INFO_START: &str = "\x1b[36m";
const HINT_START: &str = "\x1b[33m";
const PROMPT_START: &str = "\x1b[92m";
const STYLE_END: &str = "\x1b[0m";

/// Width of the `=` rule framing the banner.
pub const RULE_WIDTH: usize = 60;

/// The text styles used by the chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Banner,
    Heading,
    Info,
    Hint,
    Prompt,
}

impl Style {
    fn start(self) -> &'static str {
        match self {
            Style::Banner => BANNER_START,
            Style::Heading => HEADING_START,
            Style::Info => INFO_START,
            Style::Hint => HINT_START,
            Style::Prompt => PROMPT_START,
        }
    }
}

/// # Console (`Console`)
///
/// Styled output for the session. Generic over the sink so tests can
/// capture everything in a `Vec<u8>`.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    color: bool,
    typing_delay: Duration,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool, typing_delay: Duration) -> Self {
        Self {
            out,
            color,
            typing_delay,
        }
    }

    /// Wraps `text` in the escape codes for `style`, or returns it as-is
    /// when color is off.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style.start(), text, STYLE_END)
        } else {
            text.to_string()
        }
    }

    /// Writes one styled line.
    pub fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
        let painted = self.paint(style, text);
        writeln!(self.out, "{painted}")
    }

    /// Writes the `=` rule used above and below the banner.
    pub fn rule(&mut self) -> io::Result<()> {
        self.line(Style::Banner, &"=".repeat(RULE_WIDTH))
    }

    /// Writes `text` without a newline and flushes, for input prompts.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        let painted = self.paint(Style::Prompt, text);
        write!(self.out, "{painted}")?;
        self.out.flush()
    }

    /// # Type Line (`type_line`)
    ///
    /// Writes `text` one character at a time, sleeping for the configured
    /// delay after each one, then ends the line. The style codes are written
    /// whole, outside the per-character loop.
    pub fn type_line(&mut self, style: Style, text: &str) -> io::Result<()> {
        if self.typing_delay.is_zero() {
            return self.line(style, text);
        }
        if self.color {
            write!(self.out, "{}", style.start())?;
        }
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            thread::sleep(self.typing_delay);
        }
        if self.color {
            write!(self.out, "{STYLE_END}")?;
        }
        writeln!(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
