use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use ssp_bnb::{Fragments, OracleKind, Pruning, SearchMode, Solution, SolverBuilder, MAX_FRAGMENTS};

/// Shortest superstring of overlapping fragments by branch-and-bound
#[derive(Parser, Debug)]
#[command(name = "ssp")]
#[command(version)]
struct Cli {
    /// Fragment file, one fragment per line
    input: PathBuf,

    /// Partition the search tree at this depth and dispatch the pool
    #[arg(short, long)]
    cutoff: Option<usize>,

    /// Partition at a depth chosen from the worker count
    #[arg(long, conflicts_with = "cutoff")]
    partitioned: bool,

    /// Dedicated worker threads for the dispatcher (implies --partitioned)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Aggressive lookahead pruning (may miss the optimum)
    #[arg(long)]
    lookahead: bool,

    /// Start from an unbounded best instead of the greedy tour
    #[arg(long)]
    no_greedy_seed: bool,

    /// Overlap oracle used to fill the overlap matrix
    #[arg(long, value_enum, default_value_t = OracleArg::Naive)]
    oracle: OracleArg,

    /// Maximum number of pooled subproblems
    #[arg(long)]
    pool_capacity: Option<usize>,

    /// Maximum number of fragments accepted from the input
    #[arg(long, default_value_t = MAX_FRAGMENTS)]
    max_fragments: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OracleArg {
    Naive,
    Prefix,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    fragments: usize,
    cutoff_depth: Option<usize>,
    subproblems: Option<usize>,
    greedy_len: Option<usize>,
    best_len: usize,
    best_string: &'a str,
    order: &'a [usize],
    overlap_evaluations: u64,
    complete_orderings: u64,
    pruned: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let fragments = Fragments::from_path_with_capacity(&cli.input, cli.max_fragments)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    let n = fragments.len();

    let solver = solver_builder(&cli, fragments)
        .build()
        .context("invalid solver configuration")?;
    let cutoff_depth = match solver.config().mode {
        SearchMode::Partitioned { cutoff_depth } => cutoff_depth,
        SearchMode::Sequential => None,
    };
    let solution = solver.solve().context("search failed")?;

    match cli.format {
        Format::Text => print_text(n, cutoff_depth, &solution),
        Format::Json => {
            let best = solution.best_string_lossy();
            let report = Report {
                fragments: n,
                cutoff_depth,
                subproblems: solution.subproblems,
                greedy_len: solution.greedy_len,
                best_len: solution.best_len,
                best_string: &best,
                order: &solution.order,
                overlap_evaluations: solution.stats.overlap_evaluations,
                complete_orderings: solution.stats.complete_orderings,
                pruned: solution.stats.pruned,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Translate command-line options into a solver configuration. Asking for
/// workers implies a partitioned solve.
fn solver_builder(cli: &Cli, fragments: Fragments) -> SolverBuilder {
    let mut builder = SolverBuilder::new(fragments)
        .pruning(if cli.lookahead {
            Pruning::Lookahead
        } else {
            Pruning::Exact
        })
        .seed_with_greedy(!cli.no_greedy_seed)
        .oracle(match cli.oracle {
            OracleArg::Naive => OracleKind::NaiveScan,
            OracleArg::Prefix => OracleKind::PrefixFunction,
        });
    if let Some(cutoff) = cli.cutoff {
        builder = builder.cutoff_depth(cutoff);
    } else if cli.partitioned || cli.workers.is_some() {
        builder = builder.partitioned();
    }
    if let Some(workers) = cli.workers {
        builder = builder.workers(workers);
    }
    if let Some(capacity) = cli.pool_capacity {
        builder = builder.pool_capacity(capacity);
    }

    builder
}

fn print_text(n: usize, cutoff_depth: Option<usize>, solution: &Solution) {
    println!("Num fragments: {n}");
    if let (Some(cutoff), Some(units)) = (cutoff_depth, solution.subproblems) {
        println!("Cutoff depth: {cutoff}, Num subproblems: {units}");
    }
    if let Some(greedy) = solution.greedy_len {
        println!("Greedy bound: {greedy}");
    }
    println!("Best superstring: {}", solution.best_string_lossy());
    println!("Length: {}", solution.best_len);
    println!("Overlap evaluations: {}", solution.stats.overlap_evaluations);
    println!("Complete orderings evaluated: {}", solution.stats.complete_orderings);
}
