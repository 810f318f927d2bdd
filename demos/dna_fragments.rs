//! Example: assemble the classic twelve DNA reads.
//!
//! Run with:
//! `cargo run --release --example dna_fragments`

use ssp_bnb::{Fragments, Solver};

const READS: &[&str] = &[
    "ATTAGACCTG",
    "ATTAGACCTC",
    "CCTGCCGGAG",
    "AGACCTGCCG",
    "GCCGGAATAC",
    "GCCGGAATAG",
    "AGACCTGGCG",
    "AGACGTGCCG",
    "CCTCCCGGAA",
    "GGTGCCGGAA",
    "GGTGGGGGAA",
    "AATGCCGGAA",
];

fn main() -> Result<(), ssp_bnb::SolveError> {
    let fragments = Fragments::from_strs(READS)?;
    let naive = fragments.total_len();
    let solution = Solver::new(fragments).solve()?;

    println!("Num fragments: {}", READS.len());
    if let Some(greedy) = solution.greedy_len {
        println!("Greedy bound: {greedy}");
    }
    println!("Best superstring: {}", solution.best_string_lossy());
    println!("Length: {} (naive concatenation: {naive})", solution.best_len);
    println!("Order: {:?}", solution.order);
    println!(
        "Overlap evaluations: {}, complete orderings: {}",
        solution.stats.overlap_evaluations, solution.stats.complete_orderings
    );
    Ok(())
}
