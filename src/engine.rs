//! Branch-and-bound engine over fragment orderings.
//!
//! The engine walks permutations depth-first, ascending fragment index at
//! every branching point, extending one [`SearchFrame`] in place and undoing
//! each extension on the way back up. A transition is discarded as soon as
//! [`GlobalBest`] says no completion of it can win; since the merged length
//! never shrinks along a path, that check is exact.
//!
//! The same walk serves two purposes:
//! - full search: walk to depth `n` and offer every complete frame to the
//!   global best ([`BranchAndBound::search`], [`BranchAndBound::resume`]);
//! - partitioning: walk to a cutoff depth and hand each surviving frame to a
//!   caller-supplied sink ([`BranchAndBound::walk`], used by
//!   [`crate::partition`]).
//!
//! The engine holds only shared references, so one instance can be used from
//! many worker threads at once.

use std::convert::Infallible;

use crate::best::GlobalBest;
use crate::fragments::Fragments;
use crate::frame::SearchFrame;
use crate::matrix::OverlapMatrix;
use crate::stats::SearchStats;

/// Pruning policy applied at every transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pruning {
    /// Discard only transitions that provably cannot beat the current best.
    #[default]
    Exact,
    /// Additionally discard when `new_len` plus the overlaps the candidate has
    /// with every still-unused fragment reaches the current best length.
    ///
    /// Not admissible in general: it can cut the optimum. The answer is still
    /// a valid superstring no longer than the greedy seed.
    Lookahead,
}

/// Depth-first branch-and-bound over shared, read-only inputs.
#[derive(Debug, Clone, Copy)]
pub struct BranchAndBound<'a> {
    fragments: &'a Fragments,
    matrix: &'a OverlapMatrix,
    best: &'a GlobalBest,
    pruning: Pruning,
}

impl<'a> BranchAndBound<'a> {
    pub fn new(
        fragments: &'a Fragments,
        matrix: &'a OverlapMatrix,
        best: &'a GlobalBest,
        pruning: Pruning,
    ) -> Self {
        assert_eq!(
            fragments.len(),
            matrix.len(),
            "overlap matrix must cover every fragment"
        );
        Self {
            fragments,
            matrix,
            best,
            pruning,
        }
    }

    pub fn fragments(&self) -> &'a Fragments {
        self.fragments
    }

    pub fn best(&self) -> &'a GlobalBest {
        self.best
    }

    /// Number of fragments, i.e. the depth of a complete ordering.
    #[inline]
    pub fn depth_limit(&self) -> usize {
        self.fragments.len()
    }

    /// Explore every ordering from scratch, committing improvements.
    pub fn search(&self) -> SearchStats {
        let mut stats = SearchStats::new();
        let outcome = self.walk_roots(self.depth_limit(), &mut stats, &mut |frame, stats| {
            self.commit(frame, stats);
            Ok::<(), Infallible>(())
        });
        if let Err(never) = outcome {
            match never {}
        }
        stats
    }

    /// Continue from `frame` down to full depth, committing improvements.
    pub fn resume(&self, frame: &mut SearchFrame) -> SearchStats {
        let mut stats = SearchStats::new();
        let outcome = self.walk(frame, self.depth_limit(), &mut stats, &mut |frame, stats| {
            self.commit(frame, stats);
            Ok::<(), Infallible>(())
        });
        if let Err(never) = outcome {
            match never {}
        }
        stats
    }

    /// Visit every admissible depth-1 frame and walk each to `stop_depth`.
    pub fn walk_roots<F, E>(
        &self,
        stop_depth: usize,
        stats: &mut SearchStats,
        visit: &mut F,
    ) -> Result<(), E>
    where
        F: FnMut(&SearchFrame, &mut SearchStats) -> Result<(), E>,
    {
        assert!(
            stop_depth <= self.depth_limit(),
            "stop depth {stop_depth} beyond {} fragments",
            self.depth_limit()
        );
        for first in 0..self.fragments.len() {
            let len = self.fragments.get(first).len();
            if !self.best.admits(len, &[], first) {
                stats.pruned += 1;
                continue;
            }
            let mut frame = SearchFrame::root(self.fragments, first);
            self.walk(&mut frame, stop_depth, stats, visit)?;
        }
        Ok(())
    }

    /// Extend `frame` depth-first until `stop_depth`, calling `visit` on each
    /// surviving frame at that depth. `frame` is restored before returning.
    ///
    /// `stop_depth` must not exceed the number of fragments; callers check
    /// it once, as [`walk_roots`](Self::walk_roots) does.
    ///
    /// # Panics
    /// Panics if `frame` is empty while below `stop_depth`.
    pub fn walk<F, E>(
        &self,
        frame: &mut SearchFrame,
        stop_depth: usize,
        stats: &mut SearchStats,
        visit: &mut F,
    ) -> Result<(), E>
    where
        F: FnMut(&SearchFrame, &mut SearchStats) -> Result<(), E>,
    {
        debug_assert!(stop_depth <= self.depth_limit());
        if frame.depth() >= stop_depth {
            return visit(frame, stats);
        }

        let last = frame
            .last()
            .expect("frames below the stop depth always hold a fragment");
        let row = self.matrix.row(last);
        for next in 0..self.fragments.len() {
            if frame.used().contains(next) {
                continue;
            }
            stats.overlap_evaluations += 1;
            let fragment = self.fragments.get(next);
            let ov = row[next];
            let new_len = frame.merged_len() + fragment.len() - ov;

            if !self.best.admits(new_len, frame.order(), next)
                || self.lookahead_rejects(frame, next, new_len)
            {
                stats.pruned += 1;
                continue;
            }

            let mark = frame.merged_len();
            frame.push(next, &fragment[ov..]);
            let outcome = self.walk(frame, stop_depth, stats, visit);
            frame.pop(mark);
            outcome?;
        }
        Ok(())
    }

    fn commit(&self, frame: &SearchFrame, stats: &mut SearchStats) {
        debug_assert_eq!(frame.depth(), self.depth_limit());
        debug_assert!(
            frame.is_consistent(self.fragments, self.matrix),
            "merged string diverged from its ordering"
        );
        stats.complete_orderings += 1;
        if self.best.offer(frame) {
            stats.improvements += 1;
        }
    }

    fn lookahead_rejects(&self, frame: &SearchFrame, next: usize, new_len: usize) -> bool {
        if self.pruning != Pruning::Lookahead {
            return false;
        }
        let used = frame.used();
        let row = self.matrix.row(next);
        let remaining: usize = (0..self.fragments.len())
            .filter(|&j| j != next && !used.contains(j))
            .map(|j| row[j])
            .sum();
        new_len.saturating_add(remaining) >= self.best.bound()
    }
}
