//! Shared best-solution tracker.
//!
//! [`GlobalBest`] is the only mutable state shared between workers. Writes go
//! through [`GlobalBest::offer`], which holds the lock while it compares and
//! replaces the whole `(len, order, merged)` triple, so no reader ever sees a
//! torn pair. The length is mirrored in an atomic for the pruning hot path;
//! a stale mirror value is always an over-estimate and only costs extra
//! exploration.
//!
//! Solutions are ranked by `(len, order)` with `order` compared
//! lexicographically. Ascending-index depth-first search meets orderings in
//! lexicographic order, so the minimum key is also the first minimum-length
//! ordering a sequential search discovers, whatever the execution model.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::frame::SearchFrame;

/// A complete ordering with its merged superstring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSolution {
    pub len: usize,
    pub order: Vec<usize>,
    pub merged: Vec<u8>,
}

impl BestSolution {
    /// Placeholder for "nothing found yet": infinitely long.
    pub fn unbounded() -> Self {
        Self {
            len: usize::MAX,
            order: Vec::new(),
            merged: Vec::new(),
        }
    }

    fn ranks_below(&self, len: usize, order: &[usize]) -> bool {
        match len.cmp(&self.len) {
            CmpOrdering::Less => true,
            CmpOrdering::Greater => false,
            CmpOrdering::Equal => order < self.order.as_slice(),
        }
    }
}

/// Thread-safe best `(len, order, merged)` for one solve.
#[derive(Debug)]
pub struct GlobalBest {
    bound: AtomicUsize,
    inner: Mutex<BestSolution>,
}

impl GlobalBest {
    /// Start from "infinity".
    pub fn unbounded() -> Self {
        Self::seeded(BestSolution::unbounded())
    }

    /// Start from a known complete ordering (typically the greedy tour).
    pub fn seeded(seed: BestSolution) -> Self {
        Self {
            bound: AtomicUsize::new(seed.len),
            inner: Mutex::new(seed),
        }
    }

    /// Current best length, possibly stale. Non-increasing over a solve.
    #[inline]
    pub fn bound(&self) -> usize {
        self.bound.load(Ordering::Relaxed)
    }

    /// Whether a frame of length `len` whose order is `prefix ++ [next]` can
    /// still complete to something ranked below the current best.
    ///
    /// Exact: returns `false` only when no completion can win.
    pub fn admits(&self, len: usize, prefix: &[usize], next: usize) -> bool {
        let bound = self.bound();
        if len < bound {
            return true;
        }
        if len > bound {
            return false;
        }
        let best = self.inner.lock();
        match len.cmp(&best.len) {
            CmpOrdering::Less => true,
            CmpOrdering::Greater => false,
            CmpOrdering::Equal => prefix_not_after(prefix, next, &best.order),
        }
    }

    /// Commit `frame` if it ranks below the current best. Returns whether it did.
    pub fn offer(&self, frame: &SearchFrame) -> bool {
        let len = frame.merged_len();
        if len > self.bound() {
            return false;
        }
        let mut best = self.inner.lock();
        if !best.ranks_below(len, frame.order()) {
            return false;
        }
        best.len = len;
        best.order.clear();
        best.order.extend_from_slice(frame.order());
        best.merged.clear();
        best.merged.extend_from_slice(frame.merged());
        self.bound.store(len, Ordering::Relaxed);
        tracing::debug!(len, "best superstring improved");
        true
    }

    /// Consistent copy of the current best.
    pub fn snapshot(&self) -> BestSolution {
        self.inner.lock().clone()
    }

    pub fn into_inner(self) -> BestSolution {
        self.inner.into_inner()
    }
}

/// `prefix ++ [next] <= best[..prefix.len() + 1]` lexicographically.
fn prefix_not_after(prefix: &[usize], next: usize, best: &[usize]) -> bool {
    let depth = prefix.len();
    if best.len() <= depth {
        return true;
    }
    match prefix.cmp(&best[..depth]) {
        CmpOrdering::Less => true,
        CmpOrdering::Greater => false,
        CmpOrdering::Equal => next <= best[depth],
    }
}
