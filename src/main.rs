use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rookery_cli::{Session, SessionConfig};
use rookery_game::Game;

/// Play chess from the terminal, one command per line.
#[derive(Debug, Parser)]
#[command(name = "rookery", version)]
struct Args {
    /// Start from this position instead of the standard one.
    #[arg(long, value_name = "FEN")]
    fen: Option<String>,

    /// Do not print the board after each move.
    #[arg(long)]
    no_board: bool,

    /// Draw pieces with chess glyphs.
    #[arg(long)]
    unicode: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let game = match &args.fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("cannot start from FEN \"{fen}\""))?,
        None => Game::new(),
    };
    let config = SessionConfig {
        show_board: !args.no_board,
        unicode: args.unicode,
        ..SessionConfig::default()
    };

    info!("rookery starting");
    Session::new(game, config)
        .run(io::stdin().lock(), io::stdout().lock())
        .context("session failed")?;
    Ok(())
}
