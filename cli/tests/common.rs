//! # Carebot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`,
//! `intents.rs`, ...). Each `.rs` file in `cli/tests/` is compiled as its own
//! test crate; this module is pulled in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// # Get Carebot Command (`carebot_cmd`)
///
/// An `assert_cmd::Command` for the compiled `carebot` binary, with the
/// dataset environment override cleared so tests see the bundled dataset
/// unless they ask otherwise. Logging is switched off so stderr only holds
/// what the commands print themselves.
///
/// ## Panics
/// Panics if the `carebot` binary cannot be found via `Command::cargo_bin`.
pub fn carebot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("carebot").expect("Failed to find carebot binary for testing");
    cmd.env_remove("CAREBOT_DATASET").env("RUST_LOG", "off");
    cmd
}

/// Writes `json` to `intents.json` inside `dir` and returns the path.
pub fn write_dataset(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("intents.json");
    fs::write(&path, json).expect("Failed to write test dataset");
    path
}

/// A one-intent dataset whose only reply is deterministic.
pub const WEATHER_DATASET: &str = r#"{
  "intents": [
    { "tag": "weather", "patterns": ["is it raining"], "responses": ["Bring an umbrella."] }
  ]
}"#;

/// The apology reply for an anonymous user.
pub const APOLOGY: &str =
    "I'm sorry, I don't quite understand. Could you rephrase your question about mental health?";
