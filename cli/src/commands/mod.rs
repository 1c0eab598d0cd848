//! # Carebot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the Carebot CLI and the
//! setup they share: loading configuration, choosing the dataset and
//! building the matching engine.
//!
//! ## Commands
//!
//! - `chat`: interactive conversation
//! - `ask`: a single question and answer
//! - `intents`: inspect the loaded intent catalog
//!
//! ## Dataset Precedence
//!
//! 1. `--dataset <PATH>` (or the `CAREBOT_DATASET` environment variable)
//! 2. `[dataset] path` from the configuration files
//! 3. The dataset bundled into the binary
//!
use anyhow::Context;
use carebot::core::config::{self, Config};
use carebot::core::dataset;
use carebot::core::error::Result;
use carebot::engine::{Catalog, Engine, RngSource};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Handler and arguments for `carebot ask`.
pub mod ask;
/// Handler and arguments for `carebot chat`.
pub mod chat;
/// Handler and arguments for `carebot intents`.
pub mod intents;

/// # Dataset Arguments (`DatasetArgs`)
///
/// The dataset override shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Intent dataset (JSON) to use instead of the configured or bundled one.
    #[arg(long, env = "CAREBOT_DATASET", value_name = "PATH")]
    pub dataset: Option<PathBuf>,
}

impl DatasetArgs {
    /// The dataset to load: the CLI value if given, else the configured one.
    /// `None` means the bundled dataset.
    pub fn resolve(&self, config: &Config) -> Option<PathBuf> {
        self.dataset.clone().or_else(|| config.dataset_path())
    }
}

/// Loads the configuration files.
pub fn load_config() -> Result<Config> {
    config::load_config().context("Failed to load Carebot configuration")
}

/// Loads the catalog selected by `args` and `config`.
pub fn load_catalog(args: &DatasetArgs, config: &Config) -> Result<Catalog> {
    let path = args.resolve(config);
    debug!(dataset = ?path, "resolving intent catalog");
    dataset::load_catalog(path.as_deref())
}

/// Builds the engine with the configured match policy.
pub fn build_engine(args: &DatasetArgs, config: &Config) -> Result<Engine> {
    let catalog = load_catalog(args, config)?;
    Ok(Engine::new(catalog, config.match_policy()))
}

/// A seeded random source when `seed` is given, otherwise one seeded from
/// the operating system.
pub fn random_source(seed: Option<u64>) -> RngSource {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded random source");
            RngSource::seeded(seed)
        }
        None => RngSource::from_entropy(),
    }
}
