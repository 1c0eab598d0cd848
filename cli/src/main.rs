//! # Carebot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Carebot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - Each top-level command (`chat`, `ask`, `intents`) is a variant of the
//!   `Commands` enum, mapped to a handler in `commands::`
//! - The matching engine, configuration and session live in the `carebot`
//!   library crate
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Start a conversation
//! carebot chat
//!
//! # One-off question with routing details
//! carebot -v ask --explain "what is mental health"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (chat, ask, intents)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "carebot",
    about = "Carebot: a rule-based mental health support chatbot",
    long_about = "Chat about how you feel or ask questions about mental health.\n\
                  Carebot is not a substitute for professional care.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive conversation.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Send a single message and print the reply.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the intents in the loaded catalog.
    #[command(alias = "i")]
    Intents(commands::intents::IntentsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args),
        Commands::Ask(args) => commands::ask::handle_ask(args),
        Commands::Intents(args) => commands::intents::handle_intents(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
