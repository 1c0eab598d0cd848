//! # Carebot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure components that sit around the
//! matching engine: configuration, error management and dataset loading.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `dataset`: Reading and validating the intent dataset (JSON)
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carebot::core::config; // For loading configuration
//! use carebot::core::dataset; // For loading intents from disk
//! use carebot::core::error::{CarebotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod dataset;
pub mod error;
