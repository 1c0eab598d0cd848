//! # Carebot Intents Command
//!
//! File: cli/src/commands/intents.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `carebot intents`, which lists the loaded catalog in catalog
//! order (the order that decides scoring ties), or shows one intent in full
//! with `--tag`.
//!
//! ## Examples
//!
//! ```text
//! $ carebot intents
//! Tag              | Patterns | Responses | Origin
//! -----------------+----------+-----------+---------
//! definition       |        5 |         3 | dataset
//! ...
//! greeting         |        8 |         4 | built-in
//!
//! 16 intent(s) loaded.
//! ```
//!
use super::{load_catalog, load_config, DatasetArgs};
use carebot::core::error::{CarebotError, Result};
use carebot::engine::{Catalog, Origin};
use clap::Parser;
use std::fmt::Write as _;
use tracing::info;

/// # Intents Arguments (`IntentsArgs`)
#[derive(Parser, Debug)]
pub struct IntentsArgs {
    /// Show the patterns and responses of a single intent.
    #[arg(short, long)]
    pub tag: Option<String>,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// # Handle Intents Command (`handle_intents`)
pub fn handle_intents(args: IntentsArgs) -> Result<()> {
    info!("Handling intents command...");
    let config = load_config()?;
    let catalog = load_catalog(&args.dataset, &config)?;

    match args.tag {
        Some(tag) => print!("{}", render_intent_details(&catalog, &tag)?),
        None => print!("{}", render_intent_table(&catalog)),
    }
    Ok(())
}

/// Formats the catalog as an aligned table.
fn render_intent_table(catalog: &Catalog) -> String {
    let mut out = String::new();
    if catalog.is_empty() {
        out.push_str("No intents loaded.\n");
        return out;
    }

    let tag_width = catalog
        .intents()
        .iter()
        .map(|intent| intent.tag.len())
        .max()
        .unwrap_or(10)
        .clamp(10, 30);

    let _ = writeln!(
        out,
        "{:<width$} | Patterns | Responses | Origin",
        "Tag",
        width = tag_width
    );
    let _ = writeln!(
        out,
        "{:-<width$}-+----------+-----------+---------",
        "",
        width = tag_width
    );
    for (origin, intent) in catalog.entries() {
        let _ = writeln!(
            out,
            "{:<width$} | {:>8} | {:>9} | {}",
            intent.tag,
            intent.patterns.len(),
            intent.responses.len(),
            origin,
            width = tag_width
        );
    }
    let _ = writeln!(out, "\n{} intent(s) loaded.", catalog.len());
    out
}

/// Formats one intent with all its patterns and responses.
fn render_intent_details(catalog: &Catalog, tag: &str) -> Result<String> {
    let (origin, intent) = catalog
        .entries()
        .find(|(_, intent)| intent.tag == tag)
        .ok_or_else(|| CarebotError::ArgumentParsing(format!("Unknown intent tag '{tag}'")))?;

    let mut out = String::new();
    let source = match origin {
        Origin::Dataset => "from the dataset",
        Origin::Builtin => "built in",
    };
    let _ = writeln!(out, "Intent '{}' ({source})", intent.tag);
    let _ = writeln!(out, "\nPatterns ({}):", intent.patterns.len());
    for pattern in &intent.patterns {
        let _ = writeln!(out, "  - {pattern}");
    }
    let _ = writeln!(out, "\nResponses ({}):", intent.responses.len());
    for response in &intent.responses {
        let _ = writeln!(out, "  - {response}");
    }
    Ok(out)
}
