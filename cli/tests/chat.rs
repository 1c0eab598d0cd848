//! # Carebot CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives `carebot chat` through stdin. Typing and color are switched off so
//! the output can be matched as plain text.
//!

mod common;
use common::*;
use predicates::prelude::*;

fn chat_cmd() -> Command {
    let mut cmd = carebot_cmd();
    cmd.args(["chat", "--no-typing", "--no-color", "--seed", "1"]);
    cmd
}

#[test]
fn test_anonymous_chat_greets_and_says_goodbye() {
    chat_cmd()
        .write_stdin("\nhi\nbye\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to the Mental Health Support Chatbot")
                .and(predicate::str::contains("Your name (or press Enter to skip): "))
                .and(predicate::str::contains("How are you feeling today?"))
                .and(predicate::str::contains("You: Chatbot: H"))
                .and(predicate::str::contains(
                    "Chatbot: Take care of yourself! Remember that seeking support is a sign of strength, not weakness.",
                )),
        );
}

#[test]
fn test_named_chat_with_summary() {
    chat_cmd()
        .args(["--name", "Sam", "--summary"])
        .write_stdin("I feel sad\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Nice to meet you, Sam! How are you feeling today?")
                .and(predicate::str::contains("Your name").not())
                .and(predicate::str::contains("Take care of yourself, Sam!"))
                .and(predicate::str::contains("Session summary:"))
                .and(predicate::str::contains("Main topic:      feeling_sad")),
        );
}

#[test]
fn test_end_of_input_ends_the_session() {
    chat_cmd()
        .write_stdin("Lee\nhello")
        .assert()
        .success()
        .stdout(predicate::str::contains("Take care of yourself, Lee!"));
}

#[test]
fn test_no_color_output_has_no_escape_codes() {
    chat_cmd()
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_color_output_is_styled() {
    carebot_cmd()
        .args(["chat", "--no-typing", "--name", "Sam"])
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1;92mWelcome"));
}
