//! Naive suffix/prefix scan.

use crate::traits::OverlapOracle;

/// Tries every candidate length from the longest possible down to 1 and
/// returns the first one whose suffix/prefix windows compare equal.
///
/// Cost is O(min(|a|, |b|)²) in the worst case, which is irrelevant for
/// fragments of a few hundred symbols since the matrix is built once.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveScan;

impl OverlapOracle for NaiveScan {
    fn overlap(&self, a: &[u8], b: &[u8]) -> usize {
        let max = a.len().min(b.len());
        (1..=max)
            .rev()
            .find(|&k| a[a.len() - k..] == b[..k])
            .unwrap_or(0)
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}
