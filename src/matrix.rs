//! Precomputed n×n overlap table.
//!
//! Built once from an [`OverlapOracle`] before any search starts and read-only
//! afterwards, so every branch and every worker shares it without locking.
//! The diagonal is unused and stored as zero.

use crate::fragments::Fragments;
use crate::traits::OverlapOracle;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Row-major table of `overlap[i][j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapMatrix {
    n: usize,
    cells: Vec<usize>,
}

impl OverlapMatrix {
    /// Fill the table with `n·(n-1)` oracle calls.
    pub fn build<O: OverlapOracle + ?Sized>(fragments: &Fragments, oracle: &O) -> Self {
        let n = fragments.len();
        let cells = build_rows(fragments, oracle);
        debug_assert_eq!(cells.len(), n * n);
        tracing::debug!(fragments = n, oracle = oracle.name(), "overlap matrix built");
        Self { n, cells }
    }

    /// Number of fragments the table covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// `overlap[from][to]`; zero on the diagonal.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> usize {
        self.cells[from * self.n + to]
    }

    /// Row `from` as a slice indexed by `to`.
    #[inline]
    pub fn row(&self, from: usize) -> &[usize] {
        &self.cells[from * self.n..(from + 1) * self.n]
    }
}

fn fill_row<O: OverlapOracle + ?Sized>(fragments: &Fragments, oracle: &O, i: usize) -> Vec<usize> {
    let a = fragments.get(i);
    (0..fragments.len())
        .map(|j| if i == j { 0 } else { oracle.overlap(a, fragments.get(j)) })
        .collect()
}

#[cfg(feature = "parallel")]
fn build_rows<O: OverlapOracle + ?Sized>(fragments: &Fragments, oracle: &O) -> Vec<usize> {
    (0..fragments.len())
        .into_par_iter()
        .flat_map_iter(|i| fill_row(fragments, oracle, i))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn build_rows<O: OverlapOracle + ?Sized>(fragments: &Fragments, oracle: &O) -> Vec<usize> {
    (0..fragments.len())
        .flat_map(|i| fill_row(fragments, oracle, i))
        .collect()
}
