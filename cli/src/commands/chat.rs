//! # Carebot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `carebot chat`, the interactive conversation on stdin/stdout.
//!
//! ## Examples
//!
//! ```bash
//! carebot chat
//! carebot chat --name Sam --no-typing
//! carebot chat --seed 7 --summary --dataset ./intents.json
//! ```
//!
use super::{build_engine, load_config, random_source, DatasetArgs};
use carebot::common::ui::{Console, Style};
use carebot::core::error::Result;
use carebot::session::ChatSession;
use clap::Parser;
use std::io;
use std::time::Duration;
use tracing::info;

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Your name; skips the name prompt.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Seed for response selection, for reproducible conversations.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a summary of the conversation when it ends.
    #[arg(long)]
    pub summary: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Print replies at once instead of with the typing effect.
    #[arg(long)]
    pub no_typing: bool,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds the engine, then runs a [`ChatSession`] on the terminal until the
/// user leaves.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command...");
    let config = load_config()?;
    let engine = build_engine(&args.dataset, &config)?;
    let mut rng = random_source(args.seed);

    let color = config.color() && !args.no_color;
    let typing_delay = if args.no_typing {
        Duration::ZERO
    } else {
        config.typing_delay()
    };

    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock(), color, typing_delay);
    let mut session = ChatSession::new(&engine, &mut rng).with_user_name(args.name);
    session.run(io::stdin().lock(), &mut console)?;

    if args.summary {
        console.line(Style::Info, "")?;
        for line in session.transcript().summary().to_string().lines() {
            console.line(Style::Hint, line)?;
        }
    }
    Ok(())
}
