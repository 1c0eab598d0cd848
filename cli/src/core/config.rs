//! # Carebot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module handles loading, merging, validation, and access to
//! configuration data. It supports a multi-level approach that combines
//! defaults, user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.carebot.toml` in current directory or ancestors
//! 2. User-specific `config.toml` in the platform config dir
//!    (e.g. `~/.config/carebot/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! Every field is optional in the files; a project value wins over a user
//! value, which wins over the default. Command-line flags are applied on top
//! of the result by the command handlers.
//!
//! ## Examples
//!
//! ```toml
//! [dataset]
//! path = "~/datasets/mentalhealth.json"
//!
//! [display]
//! color = false
//! typing_delay_ms = 0
//!
//! [engine]
//! selection_threshold = 0.25
//! follow_up_tags = ["definition", "recover"]
//! ```
//!
use crate::core::error::{CarebotError, Result};
use crate::engine::MatchPolicy;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Represents the raw configuration file structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Where the intent dataset comes from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Path to a dataset JSON file (can use ~). Absent: the bundled dataset.
    pub path: Option<String>,
}

/// Terminal presentation settings.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Colored output (defaults to true).
    pub color: Option<bool>,
    /// Per-character delay of the typing effect in milliseconds (defaults to 20).
    pub typing_delay_ms: Option<u64>,
}

/// Overrides for the matching policy.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    pub selection_threshold: Option<f64>,
    pub name_prepend_probability: Option<f64>,
    pub follow_up_probability: Option<f64>,
    pub follow_up_tags: Option<Vec<String>>,
}

const PROJECT_CONFIG_FILENAME: &str = ".carebot.toml";
const DEFAULT_TYPING_DELAY_MS: u64 = 20;

impl Config {
    /// The configured dataset path, if any (already `~`-expanded once
    /// `load_config` has run).
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset.path.as_ref().map(PathBuf::from)
    }

    pub fn color(&self) -> bool {
        self.display.color.unwrap_or(true)
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(
            self.display
                .typing_delay_ms
                .unwrap_or(DEFAULT_TYPING_DELAY_MS),
        )
    }

    /// # Match Policy (`match_policy`)
    ///
    /// The built-in [`MatchPolicy`] with any `[engine]` overrides applied.
    pub fn match_policy(&self) -> MatchPolicy {
        let mut policy = MatchPolicy::default();
        if let Some(threshold) = self.engine.selection_threshold {
            policy.selection_threshold = threshold;
        }
        if let Some(p) = self.engine.name_prepend_probability {
            policy.name_prepend_probability = p;
        }
        if let Some(p) = self.engine.follow_up_probability {
            policy.follow_up_probability = p;
        }
        if let Some(tags) = &self.engine.follow_up_tags {
            policy.follow_up_tags = tags.clone();
        }
        policy
    }
}

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Carebot", "carebot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.carebot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for
/// `.carebot.toml`. Stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        dataset: DatasetConfig {
            path: project_cfg.dataset.path.or(user.dataset.path),
        },
        display: DisplayConfig {
            color: project_cfg.display.color.or(user.display.color),
            typing_delay_ms: project_cfg
                .display
                .typing_delay_ms
                .or(user.display.typing_delay_ms),
        },
        engine: EngineConfig {
            selection_threshold: project_cfg
                .engine
                .selection_threshold
                .or(user.engine.selection_threshold),
            name_prepend_probability: project_cfg
                .engine
                .name_prepend_probability
                .or(user.engine.name_prepend_probability),
            follow_up_probability: project_cfg
                .engine
                .follow_up_probability
                .or(user.engine.follow_up_probability),
            follow_up_tags: project_cfg
                .engine
                .follow_up_tags
                .or(user.engine.follow_up_tags),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(path) = &config.dataset.path {
        let expanded = shellexpand::tilde(path).into_owned();
        debug!("Expanded dataset path: {}", expanded);
        config.dataset.path = Some(expanded);
    }
    Ok(())
}

pub fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if let Some(path) = config.dataset_path() {
        if path.is_dir() {
            return Err(anyhow!(CarebotError::Config(format!(
                "Configured dataset path '{}' is a directory, expected a JSON file.",
                path.display()
            ))));
        }
        if !path.exists() {
            warn!("Configured dataset '{}' does not exist.", path.display());
        }
    }
    if let Some(threshold) = config.engine.selection_threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(anyhow!(CarebotError::Config(format!(
                "selection_threshold must be a finite number >= 0, got {threshold}"
            ))));
        }
    }
    for (field, value) in [
        ("name_prepend_probability", config.engine.name_prepend_probability),
        ("follow_up_probability", config.engine.follow_up_probability),
    ] {
        if let Some(p) = value {
            if !(0.0..=1.0).contains(&p) {
                return Err(anyhow!(CarebotError::Config(format!(
                    "{field} must be between 0 and 1, got {p}"
                ))));
            }
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [dataset]
            path = "~/data/intents.json"

            [display]
            color = false

            [engine]
            selection_threshold = 0.3
            follow_up_tags = ["recover"]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.dataset.path.as_deref(), Some("~/data/intents.json")); // Not yet expanded
        assert!(!config.color());
        assert_eq!(config.typing_delay(), Duration::from_millis(20)); // Default
        let policy = config.match_policy();
        assert_eq!(policy.selection_threshold, 0.3);
        assert_eq!(policy.name_prepend_probability, 0.3); // Default
        assert_eq!(policy.follow_up_tags, vec!["recover"]);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[engine]\nthreshold = 0.5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.color());
        assert!(config.dataset_path().is_none());
        assert_eq!(config.match_policy(), MatchPolicy::default());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user: Config = toml::from_str(
            r#"
            [dataset]
            path = "/user/data.json"
            [display]
            typing_delay_ms = 5
            color = false
        "#,
        )
        .unwrap();
        let project: Config = toml::from_str(
            r#"
            [display]
            typing_delay_ms = 0
        "#,
        )
        .unwrap();

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.dataset.path.as_deref(), Some("/user/data.json"));
        assert_eq!(merged.display.typing_delay_ms, Some(0));
        assert_eq!(merged.display.color, Some(false));
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            dataset: DatasetConfig {
                path: Some("~/intents.json".to_string()),
            },
            ..Default::default()
        };
        expand_config_paths(&mut config).unwrap();
        let expanded = config.dataset.path.unwrap();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("intents.json"));
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        let found = find_project_config_path(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(PROJECT_CONFIG_FILENAME));
    }

    #[test]
    fn test_project_search_stops_at_git_dir() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert!(find_project_config_path(&repo).is_none());
    }

    #[test]
    fn test_validate_config_invalid_threshold() {
        let config = Config {
            engine: EngineConfig {
                selection_threshold: Some(-0.1),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("selection_threshold must be"));
    }

    #[test]
    fn test_validate_config_invalid_probability() {
        let config = Config {
            engine: EngineConfig {
                follow_up_probability: Some(1.5),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("follow_up_probability"));
    }

    #[test]
    fn test_validate_config_dataset_path_is_dir() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            dataset: DatasetConfig {
                path: Some(temp_dir.path().to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn test_load_config_from_path() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[display]\ntyping_delay_ms = 7\n").unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.typing_delay(), Duration::from_millis(7));
    }
}
