//! # Carebot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the I/O side of Carebot:
//! configuration loading, dataset loading and argument handling. The matching
//! engine itself never fails; every input produces a reply, so nothing under
//! `engine::` returns these errors.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CarebotError`: A custom error enum using `thiserror` for specific failures
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if intent.responses.is_empty() {
//!     return Err(CarebotError::Dataset(format!("Intent '{}' has no responses", intent.tag)))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Carebot application.
#[derive(Error, Debug)]
pub enum CarebotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Dataset is not valid JSON: {source}")]
    DatasetParse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
