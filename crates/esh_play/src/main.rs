//! Self-play CLI
//!
//! Plays random games from the standard setup and reports the results.

use anyhow::Context;
use esh_play::{GameRunner, PlayConfig};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("esh self-play runner");
    println!();
    println!("Usage:");
    println!("  esh_play [--config FILE] [--games N] [--max-plies N] [--seed S] [--out FILE]");
    println!();
    println!("Options:");
    println!("  -c, --config FILE    TOML file with games, max_plies, seed, output");
    println!("  -g, --games N        Number of games (default 10)");
    println!("  -m, --max-plies N    Plies before a game is drawn (default 200)");
    println!("  -s, --seed S         Seed for reproducible games");
    println!("  -o, --out FILE       Write a JSON summary");
    println!();
    println!("Logging is controlled by RUST_LOG (default: info).");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    let config = PlayConfig::from_args(&args)?;
    info!(
        games = config.games,
        max_plies = config.max_plies,
        seed = ?config.seed,
        "starting self-play"
    );

    let mut runner = GameRunner::new(config.clone());
    let summary = runner.run()?;
    print!("{}", summary.report());

    if let Some(path) = &config.output {
        summary
            .save(path)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    Ok(())
}
