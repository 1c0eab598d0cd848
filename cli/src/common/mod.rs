//! # Carebot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers used by the interactive session and the command handlers
//! that do not belong to the matching engine itself.
//!
//! - **`ui`**: terminal styling and the typing-effect printer.
//!

/// Terminal presentation: ANSI styles, colored lines and the typing effect.
pub mod ui;
