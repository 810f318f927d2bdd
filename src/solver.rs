//! Top-level solve orchestration.
//!
//! fragments → overlap matrix → greedy seed → either a direct
//! branch-and-bound search, or partition → dispatch → branch-and-bound per
//! unit. Both routes share one [`GlobalBest`] and end with the same answer.

use crate::best::{BestSolution, GlobalBest};
use crate::bound::greedy_tour;
use crate::builder::{SearchMode, SolverConfig};
use crate::dispatch::Dispatcher;
use crate::engine::BranchAndBound;
use crate::error::SolveResult;
use crate::fragments::Fragments;
use crate::matrix::OverlapMatrix;
use crate::partition::partition;
use crate::stats::SearchStats;

/// Outcome of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Length of the shortest overlap-chain superstring found.
    pub best_len: usize,
    pub best_string: Vec<u8>,
    /// Fragment indices in merge order.
    pub order: Vec<usize>,
    /// Length of the greedy seed, when one was used.
    pub greedy_len: Option<usize>,
    /// Pool size, for partitioned solves.
    pub subproblems: Option<usize>,
    pub stats: SearchStats,
}

impl Solution {
    fn empty() -> Self {
        Self {
            best_len: 0,
            best_string: Vec::new(),
            order: Vec::new(),
            greedy_len: None,
            subproblems: None,
            stats: SearchStats::new(),
        }
    }

    /// Best superstring as text, replacing invalid UTF-8.
    pub fn best_string_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.best_string)
    }
}

/// Shortest-superstring solver for one fragment list.
///
/// ```
/// use ssp_bnb::{Fragments, Solver};
///
/// let fragments = Fragments::from_strs(&["AB", "BC"]).unwrap();
/// let solution = Solver::new(fragments).solve().unwrap();
/// assert_eq!(solution.best_len, 3);
/// assert_eq!(solution.best_string, b"ABC");
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    fragments: Fragments,
    config: SolverConfig,
}

impl Solver {
    /// Sequential, exact, greedy-seeded solver.
    pub fn new(fragments: Fragments) -> Self {
        Self {
            fragments,
            config: SolverConfig::default(),
        }
    }

    /// Validate `config` against the fragment count and resolve defaults.
    pub fn with_config(fragments: Fragments, config: SolverConfig) -> SolveResult<Self> {
        let config = config.validate(fragments.len())?;
        Ok(Self { fragments, config })
    }

    pub fn fragments(&self) -> &Fragments {
        &self.fragments
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run the configured search to completion.
    pub fn solve(&self) -> SolveResult<Solution> {
        let n = self.fragments.len();
        let span = tracing::info_span!("solve", fragments = n, mode = ?self.config.mode);
        let _enter = span.enter();

        if n == 0 {
            return Ok(Solution::empty());
        }

        let matrix = OverlapMatrix::build(&self.fragments, self.config.oracle.oracle());
        let (best, greedy_len) = if self.config.seed_with_greedy {
            let seed = greedy_tour(&self.fragments, &matrix);
            let len = seed.len;
            (GlobalBest::seeded(seed), Some(len))
        } else {
            (GlobalBest::unbounded(), None)
        };
        let engine = BranchAndBound::new(&self.fragments, &matrix, &best, self.config.pruning);

        let (stats, subproblems) = match self.config.mode {
            SearchMode::Sequential => (engine.search(), None),
            SearchMode::Partitioned { cutoff_depth } => {
                let cutoff = cutoff_depth.expect("validated config carries a resolved cutoff");
                let (pool, partition_stats) =
                    partition(&engine, cutoff, self.config.pool_capacity)?;
                let units = pool.len();
                let dispatcher = match self.config.workers {
                    Some(workers) => Dispatcher::with_workers(workers)?,
                    None => Dispatcher::new(),
                };
                let unit_stats = dispatcher.run(&engine, pool)?;
                (partition_stats.merge(unit_stats), Some(units))
            }
        };

        let BestSolution { len, order, merged } = best.into_inner();
        debug_assert_eq!(order.len(), n, "a complete ordering always survives");
        debug_assert_eq!(merged.len(), len);
        tracing::info!(
            best_len = len,
            complete_orderings = stats.complete_orderings,
            overlap_evaluations = stats.overlap_evaluations,
            "solve finished"
        );
        Ok(Solution {
            best_len: len,
            best_string: merged,
            order,
            greedy_len,
            subproblems,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SolverBuilder;
    use crate::engine::Pruning;

    fn fragments(items: &[&str]) -> Fragments {
        Fragments::from_strs(items).unwrap()
    }

    #[test]
    fn solver_keeps_its_fragments() {
        let solver = Solver::new(fragments(&["AB", "BC"]));
        assert_eq!(solver.fragments(), &fragments(&["AB", "BC"]));
        assert_eq!(solver.config(), &SolverConfig::default());
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let solution = Solver::new(fragments(&[])).solve().unwrap();
        assert_eq!(solution.best_len, 0);
        assert!(solution.best_string.is_empty());
        assert!(solution.order.is_empty());
    }

    #[test]
    fn unseeded_and_seeded_agree() {
        let items = ["GCCGGAATAC", "ATTAGACCTG", "CCTGCCGGAG", "AGACCTGCCG"];
        let seeded = Solver::new(fragments(&items)).solve().unwrap();
        let unseeded = SolverBuilder::new(fragments(&items))
            .seed_with_greedy(false)
            .build()
            .unwrap()
            .solve()
            .unwrap();
        assert_eq!(seeded.best_len, unseeded.best_len);
        assert_eq!(seeded.best_string, unseeded.best_string);
        assert_eq!(seeded.order, unseeded.order);
        assert!(seeded.greedy_len.is_some());
        assert!(unseeded.greedy_len.is_none());
    }

    #[test]
    fn partitioned_reports_pool_size() {
        let solution = SolverBuilder::new(fragments(&["AB", "BC", "CD"]))
            .cutoff_depth(1)
            .build()
            .unwrap()
            .solve()
            .unwrap();
        assert_eq!(solution.subproblems, Some(3));
        assert_eq!(solution.best_string, b"ABCD");
    }

    #[test]
    fn lookahead_never_exceeds_greedy() {
        let items = ["ATTAGACCTG", "CCTGCCGGAG", "AGACCTGCCG", "GCCGGAATAC", "AGACCTGGCG"];
        let solution = SolverBuilder::new(fragments(&items))
            .pruning(Pruning::Lookahead)
            .build()
            .unwrap()
            .solve()
            .unwrap();
        assert!(solution.best_len <= solution.greedy_len.unwrap());
        assert_eq!(solution.best_string.len(), solution.best_len);
    }
}
