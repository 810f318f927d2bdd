//! Fixed-depth partitioning of the search tree.
//!
//! The partitioner runs the engine's pruned walk only down to a cutoff depth
//! and snapshots every frame that survives there into a [`WorkPool`]. Each
//! snapshot is an independent [`Subproblem`]: resuming the engine from all of
//! them covers exactly the orderings the full search would have explored.

use crate::engine::BranchAndBound;
use crate::error::{SolveError, SolveResult};
use crate::frame::SearchFrame;
use crate::stats::SearchStats;

/// Default upper bound on the number of pooled subproblems.
pub const DEFAULT_POOL_CAPACITY: usize = 1 << 20;

/// A frame captured at the cutoff depth, owned by whoever resumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subproblem {
    frame: SearchFrame,
}

impl Subproblem {
    pub fn frame(&self) -> &SearchFrame {
        &self.frame
    }

    pub fn into_frame(self) -> SearchFrame {
        self.frame
    }
}

/// Bounded, ordered collection of subproblems.
#[derive(Debug, Clone)]
pub struct WorkPool {
    units: Vec<Subproblem>,
    capacity: usize,
    cutoff_depth: usize,
}

impl WorkPool {
    pub fn new(cutoff_depth: usize, capacity: usize) -> Self {
        Self {
            units: Vec::new(),
            capacity,
            cutoff_depth,
        }
    }

    /// Append a snapshot of `frame`; overflowing the capacity is fatal.
    pub fn push(&mut self, frame: &SearchFrame) -> SolveResult<()> {
        if self.units.len() >= self.capacity {
            return Err(SolveError::PoolOverflow {
                capacity: self.capacity,
            });
        }
        debug_assert_eq!(frame.depth(), self.cutoff_depth);
        self.units.push(Subproblem {
            frame: frame.clone(),
        });
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn cutoff_depth(&self) -> usize {
        self.cutoff_depth
    }

    pub fn units(&self) -> &[Subproblem] {
        &self.units
    }

    pub fn into_units(self) -> Vec<Subproblem> {
        self.units
    }
}

/// Walk the tree down to `cutoff_depth` and pool every surviving frame.
///
/// Pruning consults the same global best as the full search, so a tight seed
/// shrinks the pool. Returns the pool and the effort spent building it.
pub fn partition(
    engine: &BranchAndBound<'_>,
    cutoff_depth: usize,
    capacity: usize,
) -> SolveResult<(WorkPool, SearchStats)> {
    let n = engine.depth_limit();
    if n > 0 && !(1..=n).contains(&cutoff_depth) {
        return Err(SolveError::InvalidCutoff {
            cutoff: cutoff_depth,
            fragments: n,
        });
    }

    let mut pool = WorkPool::new(cutoff_depth, capacity);
    let mut stats = SearchStats::new();
    if n > 0 {
        engine.walk_roots(cutoff_depth, &mut stats, &mut |frame, _| pool.push(frame))?;
    }
    tracing::debug!(
        cutoff_depth,
        subproblems = pool.len(),
        pruned = stats.pruned,
        "work pool built"
    );
    Ok((pool, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best::{BestSolution, GlobalBest};
    use crate::engine::Pruning;
    use crate::fragments::Fragments;
    use crate::matrix::OverlapMatrix;
    use crate::oracle::NaiveScan;

    fn with_engine<R>(items: &[&str], f: impl FnOnce(&BranchAndBound<'_>) -> R) -> R {
        let fragments = Fragments::from_strs(items).unwrap();
        let matrix = OverlapMatrix::build(&fragments, &NaiveScan);
        let best = GlobalBest::unbounded();
        let engine = BranchAndBound::new(&fragments, &matrix, &best, Pruning::Exact);
        f(&engine)
    }

    #[test]
    fn cutoff_one_yields_one_unit_per_fragment() {
        with_engine(&["AB", "BC", "CD", "DA"], |engine| {
            let (pool, _) = partition(engine, 1, DEFAULT_POOL_CAPACITY).unwrap();
            assert_eq!(pool.len(), 4);
            let firsts: Vec<_> = pool.units().iter().map(|u| u.frame().order()[0]).collect();
            assert_eq!(firsts, vec![0, 1, 2, 3]);
        });
    }

    #[test]
    fn unbounded_cutoff_two_yields_every_ordered_pair() {
        with_engine(&["AB", "BC", "CD"], |engine| {
            let (pool, stats) = partition(engine, 2, DEFAULT_POOL_CAPACITY).unwrap();
            assert_eq!(pool.len(), 6);
            assert_eq!(pool.cutoff_depth(), 2);
            assert_eq!(stats.overlap_evaluations, 6);
            assert!(pool.units().iter().all(|u| u.frame().depth() == 2));
        });
    }

    #[test]
    fn full_depth_cutoff_pools_complete_orderings() {
        with_engine(&["AB", "BC", "CD"], |engine| {
            let (pool, stats) = partition(engine, 3, DEFAULT_POOL_CAPACITY).unwrap();
            assert_eq!(pool.len(), 6);
            assert_eq!(stats.complete_orderings, 0);
        });
    }

    #[test]
    fn overflow_is_an_error() {
        with_engine(&["AB", "BC", "CD"], |engine| {
            let err = partition(engine, 2, 5).unwrap_err();
            assert!(matches!(err, SolveError::PoolOverflow { capacity: 5 }));
        });
    }

    #[test]
    fn cutoff_outside_range_is_rejected() {
        with_engine(&["AB", "BC"], |engine| {
            assert!(matches!(
                partition(engine, 0, DEFAULT_POOL_CAPACITY),
                Err(SolveError::InvalidCutoff { cutoff: 0, fragments: 2 })
            ));
            assert!(matches!(
                partition(engine, 3, DEFAULT_POOL_CAPACITY),
                Err(SolveError::InvalidCutoff { cutoff: 3, fragments: 2 })
            ));
        });
    }

    #[test]
    fn seeded_bound_shrinks_the_pool() {
        // "EFGHIJK" then "ABCDEFG" merges to 14 symbols, past the optimum of 13.
        let fragments = Fragments::from_strs(&["ABCDEFG", "EFGHIJK", "XY"]).unwrap();
        let matrix = OverlapMatrix::build(&fragments, &NaiveScan);

        let unbounded = GlobalBest::unbounded();
        let engine = BranchAndBound::new(&fragments, &matrix, &unbounded, Pruning::Exact);
        let (open_pool, open_stats) = partition(&engine, 2, DEFAULT_POOL_CAPACITY).unwrap();
        assert_eq!(open_pool.len(), 6);
        assert_eq!(open_stats.pruned, 0);

        let seeded = GlobalBest::seeded(BestSolution {
            len: 13,
            order: vec![0, 1, 2],
            merged: b"ABCDEFGHIJKXY".to_vec(),
        });
        let engine = BranchAndBound::new(&fragments, &matrix, &seeded, Pruning::Exact);
        let (pool, stats) = partition(&engine, 2, DEFAULT_POOL_CAPACITY).unwrap();
        assert_eq!(pool.len(), 5);
        assert!(pool.len() < open_pool.len());
        assert_eq!(stats.pruned, 1);
        assert!(pool.units().iter().all(|u| u.frame().order() != [1, 0]));
    }
}
