//! # Carebot Intent Dataset Loader
//!
//! File: cli/src/core/dataset.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Reads the intent dataset and hands the engine an already-parsed list of
//! intents. The expected format is the common chatbot-intents JSON layout:
//!
//! ```json
//! {
//!   "intents": [
//!     { "tag": "definition", "patterns": ["what is mental health"], "responses": ["..."] }
//!   ]
//! }
//! ```
//!
//! Extra per-intent keys (such as `context`) are ignored. A bundled dataset
//! is compiled into the binary and used whenever no path is configured.
//!
//! ## Validation
//!
//! - An intent with a blank tag or no responses is rejected: the engine could
//!   select it and have nothing to say.
//! - Duplicate tags and intents without patterns are logged as warnings and
//!   kept; tag lookups use the first occurrence.
//!
use crate::core::error::{CarebotError, Result};
use crate::engine::{Catalog, Intent};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// The dataset shipped with Carebot.
pub const BUNDLED_DATASET: &str = include_str!("../../data/mentalhealth.json");

#[derive(Deserialize, Debug)]
struct DatasetFile {
    intents: Vec<Intent>,
}

/// # Parse Dataset (`parse_dataset`)
///
/// Parses and validates dataset JSON.
pub fn parse_dataset(json: &str) -> Result<Vec<Intent>> {
    let file: DatasetFile = serde_json::from_str(json).map_err(CarebotError::from)?;
    validate_intents(&file.intents)?;
    Ok(file.intents)
}

/// # Load Dataset (`load_dataset`)
///
/// Reads the dataset at `path`, or the bundled one when `path` is `None`.
pub fn load_dataset(path: Option<&Path>) -> Result<Vec<Intent>> {
    match path {
        Some(path) => {
            info!("Loading intent dataset from: {}", path.display());
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
            parse_dataset(&content)
                .with_context(|| format!("Invalid dataset file: {}", path.display()))
        }
        None => {
            debug!("Using bundled intent dataset.");
            parse_dataset(BUNDLED_DATASET).context("Bundled dataset is invalid")
        }
    }
}

/// Loads the dataset and appends the built-in emotional-support intents.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let intents = load_dataset(path)?;
    let catalog = Catalog::assemble(intents);
    info!("Intent catalog ready with {} intents.", catalog.len());
    Ok(catalog)
}

fn validate_intents(intents: &[Intent]) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, intent) in intents.iter().enumerate() {
        if intent.tag.trim().is_empty() {
            return Err(CarebotError::Dataset(format!("Intent #{index} has an empty tag")).into());
        }
        if intent.responses.is_empty() {
            return Err(CarebotError::Dataset(format!(
                "Intent '{}' has no responses",
                intent.tag
            ))
            .into());
        }
        if intent.patterns.is_empty() {
            warn!(
                "Intent '{}' has no patterns and can never be matched by scoring.",
                intent.tag
            );
        }
        if !seen.insert(intent.tag.as_str()) {
            warn!(
                "Duplicate intent tag '{}' in dataset; lookups use the first one.",
                intent.tag
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bundled_dataset_is_valid() {
        let intents = parse_dataset(BUNDLED_DATASET).expect("bundled dataset must parse");
        assert!(!intents.is_empty());
        for tag in ["definition", "affects_whom", "what_causes"] {
            assert!(
                intents.iter().any(|i| i.tag == tag),
                "bundled dataset lacks '{tag}'"
            );
        }
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{"intents": [
            {"tag": "greeting", "patterns": ["hi"], "responses": ["Hello"], "context": [""]}
        ]}"#;
        let intents = parse_dataset(json).unwrap();
        assert_eq!(intents, vec![Intent::new("greeting", ["hi"], ["Hello"])]);
    }

    #[test]
    fn test_missing_responses_are_rejected() {
        let json = r#"{"intents": [{"tag": "silent", "patterns": ["hi"]}]}"#;
        let err = parse_dataset(json).unwrap_err();
        assert!(err.to_string().contains("Intent 'silent' has no responses"));
    }

    #[test]
    fn test_blank_tag_is_rejected() {
        let json = r#"{"intents": [{"tag": " ", "patterns": ["hi"], "responses": ["r"]}]}"#;
        assert!(parse_dataset(json).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_dataset("{\"intents\": [").unwrap_err();
        assert!(err.to_string().starts_with("Dataset is not valid JSON"));
    }

    #[test]
    fn test_duplicates_and_patternless_intents_are_kept() {
        let json = r#"{"intents": [
            {"tag": "a", "patterns": [], "responses": ["r1"]},
            {"tag": "a", "patterns": ["x"], "responses": ["r2"]}
        ]}"#;
        assert_eq!(parse_dataset(json).unwrap().len(), 2);
    }

    #[test]
    fn test_load_dataset_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("intents.json");
        fs::write(
            &path,
            r#"{"intents": [{"tag": "t", "patterns": ["p"], "responses": ["r"]}]}"#,
        )
        .unwrap();

        let catalog = load_catalog(Some(path.as_path())).unwrap();
        assert_eq!(catalog.intents()[0].tag, "t");
        assert_eq!(catalog.len(), 1 + crate::engine::catalog::builtin_intents().len());
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = load_dataset(Some(temp_dir.path().join("nope.json").as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read dataset file"));
    }
}
