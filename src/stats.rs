//! Search-effort counters.
//!
//! Each traversal (the sequential search, the partitioner, every dispatched
//! unit) owns a private [`SearchStats`] and the results are merged at the end,
//! so counting never contends across workers.

use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Transitions considered, i.e. overlap-table lookups.
    pub overlap_evaluations: u64,
    /// Frames that reached full depth.
    pub complete_orderings: u64,
    /// Transitions discarded by the bound.
    pub pruned: u64,
    /// Complete orderings that replaced the global best.
    pub improvements: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(mut self, other: SearchStats) -> SearchStats {
        self += other;
        self
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: SearchStats) {
        self.overlap_evaluations += rhs.overlap_evaluations;
        self.complete_orderings += rhs.complete_orderings;
        self.pruned += rhs.pruned;
        self.improvements += rhs.improvements;
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStats;

    #[test]
    fn merge_sums_every_counter() {
        let a = SearchStats {
            overlap_evaluations: 10,
            complete_orderings: 2,
            pruned: 3,
            improvements: 1,
        };
        let b = SearchStats {
            overlap_evaluations: 5,
            complete_orderings: 1,
            pruned: 0,
            improvements: 1,
        };
        let m = a.merge(b);
        assert_eq!(m.overlap_evaluations, 15);
        assert_eq!(m.complete_orderings, 3);
        assert_eq!(m.pruned, 3);
        assert_eq!(m.improvements, 2);
        assert_eq!(SearchStats::new().merge(a), a);
    }
}
