//! Example: split the search tree into subproblems and dispatch them.
//!
//! Run with:
//! `cargo run --release --example partitioned -- --cutoff 3 --workers 8`

use clap::Parser;
use ssp_bnb::{Fragments, Solver, SolverBuilder};

#[derive(Parser)]
struct Args {
    /// Depth at which the search tree is split
    #[arg(long, default_value_t = 2)]
    cutoff: usize,

    /// Worker threads for the dispatcher
    #[arg(long, default_value_t = 4)]
    workers: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("ssp_bnb=debug"))
        .init();

    let Args { cutoff, workers } = Args::parse();

    let reads = [
        "ATTAGACCTG",
        "ATTAGACCTC",
        "CCTGCCGGAG",
        "AGACCTGCCG",
        "GCCGGAATAC",
        "GCCGGAATAG",
        "AGACCTGGCG",
        "AGACGTGCCG",
        "CCTCCCGGAA",
    ];
    let fragments = Fragments::from_strs(&reads)?;

    let sequential = Solver::new(fragments.clone()).solve()?;
    let partitioned = SolverBuilder::new(fragments)
        .cutoff_depth(cutoff)
        .workers(workers)
        .build()?
        .solve()?;

    println!(
        "cutoff {cutoff}: {} subproblems on {workers} workers",
        partitioned.subproblems.unwrap_or(0)
    );
    println!("sequential:  {} ({})", sequential.best_string_lossy(), sequential.best_len);
    println!("partitioned: {} ({})", partitioned.best_string_lossy(), partitioned.best_len);
    assert_eq!(sequential.order, partitioned.order);
    Ok(())
}
