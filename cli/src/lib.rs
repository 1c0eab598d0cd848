//! # Carebot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Carebot is a rule-based mental-health support chatbot. Each user message
//! is normalized, checked against a small emotional keyword map and, failing
//! that, scored against a catalog of intents; the reply is drawn from the
//! winning intent's responses or from an empathetic fallback.
//!
//! ## Architecture
//!
//! - **`engine`**: the matching pipeline (normalizer, catalog, keyword
//!   override, scorer, composer). Pure and synchronous.
//! - **`core`**: configuration, dataset loading and error types.
//! - **`session`**: the interactive read-respond loop and its transcript.
//! - **`common`**: terminal presentation helpers.
//!
//! The `carebot` binary adds the command-line layer on top of this library.
//!
pub mod common;
pub mod core;
pub mod engine;
pub mod session;
