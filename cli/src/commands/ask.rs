//! # Carebot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `carebot ask`: one message in, one reply out. The reply goes
//! to stdout; with `--explain`, the normalized tokens and the route that
//! produced the reply go to stderr so stdout stays scriptable.
//!
//! ## Examples
//!
//! ```bash
//! carebot ask "what causes mental illness?"
//! carebot ask --name Sam --seed 3 --explain I feel so alone
//! ```
//!
use super::{build_engine, load_config, random_source, DatasetArgs};
use carebot::core::error::Result;
use carebot::engine::Normalizer;
use clap::Parser;
use tracing::info;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to send. Several words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Your name, used to personalize the reply.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Seed for response selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show how the reply was chosen (on stderr).
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// # Handle Ask Command (`handle_ask`)
pub fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command...");
    let config = load_config()?;
    let engine = build_engine(&args.dataset, &config)?;
    let mut rng = random_source(args.seed);

    let text = args.text.join(" ");
    let reply = engine.respond(&text, args.name.as_deref(), &mut rng);

    if args.explain {
        eprintln!("tokens: {:?}", Normalizer::new().normalize(&text));
        eprintln!("route:  {}", reply.route);
    }
    println!("{}", reply.text);
    Ok(())
}
