//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p esh_play -- [depth]
//!
//! Examples:
//!   # Default: depth 4 from the standard setup
//!   cargo flamegraph --example perft_bench -p esh_play
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p esh_play -- 5

use esh_core::{divide, perft, Side};
use esh_play::standard_board;
use std::env;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let depth: u8 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let board = standard_board()?;

    println!("=== Perft Benchmark ===");
    println!("{board}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&board, Side::White, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let branches = divide(&board, Side::White, depth);
    let elapsed = start.elapsed();

    let nodes: u64 = branches.iter().map(|(_, n)| n).sum();
    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Root moves: {}", branches.len());
    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
    Ok(())
}
