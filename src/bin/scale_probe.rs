use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use ssp_bnb::oracle::NaiveScan;
use ssp_bnb::{Fragments, OverlapMatrix, Pruning, Solution, SolverBuilder};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Time and memory probe for the branch-and-bound solver across fragment counts
#[derive(Parser, Debug)]
#[command(name = "scale_probe")]
struct Options {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest fragment count to probe
    #[arg(long, default_value_t = 10)]
    max_fragments: usize,

    /// Largest fragment count checked against exhaustive enumeration
    #[arg(long, default_value_t = 8)]
    verify_limit: usize,

    /// Fragment length of the generated reads
    #[arg(long, default_value_t = 12)]
    read_len: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> Result<()> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    fragments: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    best_len: usize,
    complete_orderings: u64,
    status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn main() -> Result<()> {
    let options = Options::parse();
    if options.max_fragments < 2 {
        bail!("--max-fragments must be at least 2");
    }
    if options.read_len < 2 {
        bail!("--read-len must be at least 2");
    }

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("SSP branch-and-bound scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  • sequential: single depth-first search from every root");
    eprintln!("  • partitioned: cutoff at depth 2, pool dispatched to workers");
    eprintln!("  • lookahead: sequential with aggressive pruning (heuristic)");
    eprintln!(
        "  • status: exact scenarios are checked against exhaustive enumeration up to n={}",
        options.verify_limit
    );
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    for n in 2..=options.max_fragments {
        eprintln!("[n={n}]");
        let fragments = sampled_reads(n, options.read_len);
        let baseline = (n <= options.verify_limit).then(|| exhaustive_min_len(&fragments));

        let sequential = probe("sequential", &fragments, &mut sys, baseline, |b| b)?;
        let reference = sequential.1;
        report(&sequential.0);
        measurements.push(sequential.0);

        let partitioned = probe("partitioned", &fragments, &mut sys, baseline, |b| {
            b.cutoff_depth(2)
        })?;
        let mut m = partitioned.0;
        if m.status != VerificationStatus::Failed
            && (partitioned.1.best_string != reference.best_string
                || partitioned.1.order != reference.order)
        {
            m.status = VerificationStatus::Failed;
            m.detail = Some("partitioned answer differs from sequential".to_string());
        } else if m.status == VerificationStatus::NotChecked {
            m.status = VerificationStatus::Passed;
            m.detail = Some("matches sequential".to_string());
        }
        report(&m);
        measurements.push(m);

        let lookahead = probe("lookahead", &fragments, &mut sys, None, |b| {
            b.pruning(Pruning::Lookahead)
        })?;
        let mut m = lookahead.0;
        if lookahead.1.best_len < reference.best_len {
            m.status = VerificationStatus::Failed;
            m.detail = Some(format!(
                "lookahead {} beats exact optimum {}",
                lookahead.1.best_len, reference.best_len
            ));
        }
        report(&m);
        measurements.push(m);
        eprintln!();
    }

    print_summary(&measurements);
    options.format.write(&measurements)
}

fn probe<F>(
    scenario: &'static str,
    fragments: &Fragments,
    sys: &mut System,
    baseline: Option<usize>,
    configure: F,
) -> Result<(Measurement, Solution)>
where
    F: FnOnce(SolverBuilder) -> SolverBuilder,
{
    let solver = configure(SolverBuilder::new(fragments.clone())).build()?;
    let before = rss_kib(sys);
    let start = Instant::now();
    let solution = solver.solve()?;
    let duration = start.elapsed();
    let after = rss_kib(sys);

    let (status, detail) = match baseline {
        Some(expected) if expected == solution.best_len => (VerificationStatus::Passed, None),
        Some(expected) => (
            VerificationStatus::Failed,
            Some(format!("expected {expected}, got {}", solution.best_len)),
        ),
        None => (VerificationStatus::NotChecked, None),
    };
    let measurement = Measurement {
        scenario,
        fragments: fragments.len(),
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        best_len: solution.best_len,
        complete_orderings: solution.stats.complete_orderings,
        status,
        detail,
    };
    Ok((measurement, solution))
}

fn report(m: &Measurement) {
    eprintln!(
        "      {} {:<12} len={:<5} orderings={:<10} time={:.3}s status={}",
        m.status.icon(),
        m.scenario,
        m.best_len,
        m.complete_orderings,
        m.wall_s,
        m.status.label()
    );
}

fn print_summary(measurements: &[Measurement]) {
    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    eprintln!("{}", "=".repeat(80));
    eprintln!(
        "Runs: {}  ✓ {}  ✗ {}  ○ {}",
        measurements.len(),
        passed,
        failed,
        not_checked
    );
    for m in measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
    {
        eprintln!(
            "  ✗ {} (n={}): {}",
            m.scenario,
            m.fragments,
            m.detail.as_deref().unwrap_or("")
        );
    }

    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in &by_scenario {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {scenario}: max_time={max_time:.3}s, max_rss_delta={max_mem} KiB");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<()> {
    println!("scenario,fragments,wall_s,rss_delta_kib,best_len,complete_orderings,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},{},{},\"{}\"",
            m.scenario,
            m.fragments,
            m.wall_s,
            m.rss_delta_kib,
            m.best_len,
            m.complete_orderings,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<()> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .chain(std::iter::once("scenario".len()))
        .max()
        .unwrap_or(0);

    println!(
        "{:<col1$}  {:>9}  {:>10}  {:>14}  {:>8}  {:>12}  {:>11}  {}",
        "scenario", "fragments", "wall_s", "rss_delta_kib", "best_len", "orderings", "status", "detail",
    );
    println!(
        "{:-<col1$}  {:-<9}  {:-<10}  {:-<14}  {:-<8}  {:-<12}  {:-<11}  {:-<12}",
        "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>9}  {:>10.3}  {:>14}  {:>8}  {:>12}  {:>11}  {}",
            m.scenario,
            m.fragments,
            m.wall_s,
            m.rss_delta_kib,
            m.best_len,
            m.complete_orderings,
            m.status.label(),
            m.detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(measurements)?);
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// `n` overlapping reads of a fixed pseudo-random genome, each starting a
/// quarter of `read_len` after the previous one.
fn sampled_reads(n: usize, read_len: usize) -> Fragments {
    const ALPHABET: &[u8] = b"ACGT";
    let step = (read_len / 4).max(1);
    let genome_len = step * n + read_len;
    let mut rng = StdRng::seed_from_u64(42);
    let genome: Vec<u8> = (0..genome_len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect();
    // Shuffle the read order with a stride coprime to n so input order does
    // not match genome order.
    let stride = (1..n).rev().find(|s| gcd(*s, n) == 1).unwrap_or(1);
    let items = (0..n)
        .map(|i| {
            let start = ((i * stride) % n) * step;
            genome[start..start + read_len].to_vec()
        })
        .collect();
    Fragments::new(items).expect("generated reads are non-empty and few")
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Minimum merged length over all `n!` orderings.
fn exhaustive_min_len(fragments: &Fragments) -> usize {
    let matrix = OverlapMatrix::build(fragments, &NaiveScan);
    let mut order: Vec<usize> = (0..fragments.len()).collect();
    let mut best = usize::MAX;
    permute(&mut order, 0, fragments, &matrix, &mut best);
    best
}

fn permute(
    order: &mut [usize],
    k: usize,
    fragments: &Fragments,
    matrix: &OverlapMatrix,
    best: &mut usize,
) {
    if k == order.len() {
        let len = fragments.get(order[0]).len()
            + order
                .windows(2)
                .map(|w| fragments.get(w[1]).len() - matrix.get(w[0], w[1]))
                .sum::<usize>();
        *best = (*best).min(len);
        return;
    }
    for i in k..order.len() {
        order.swap(k, i);
        permute(order, k + 1, fragments, matrix, best);
        order.swap(k, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_reads_are_reproducible() {
        assert_eq!(sampled_reads(6, 12), sampled_reads(6, 12));
    }

    #[test]
    fn sampled_reads_have_the_requested_shape() {
        let reads = sampled_reads(7, 12);
        assert_eq!(reads.len(), 7);
        assert!(reads.iter().all(|r| r.len() == 12));
        assert!(reads.iter().flatten().all(|s| b"ACGT".contains(s)));
    }

    #[test]
    fn exhaustive_baseline_matches_solver() {
        let reads = sampled_reads(5, 12);
        let solution = SolverBuilder::new(reads.clone()).build().unwrap().solve().unwrap();
        assert_eq!(exhaustive_min_len(&reads), solution.best_len);
    }
}
