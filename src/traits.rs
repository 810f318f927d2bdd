//! Core trait definitions for suffix/prefix overlap computation.
//!
//! The search never compares strings directly. It consults an
//! [`OverlapMatrix`](crate::matrix::OverlapMatrix) that is filled once, up
//! front, by an [`OverlapOracle`]. Plugging a different oracle into the matrix
//! builder changes how that one-off precomputation runs, never what the search
//! sees.
//!
//! Two oracles ship with the crate (see [`crate::oracle`]):
//! - a naive scan that tries every candidate length from the longest down,
//! - a prefix-function (KMP) automaton that runs in linear time.

/// Pairwise maximal suffix/prefix match.
///
/// Contract for `overlap(a, b)`:
/// - returns the largest `k` with `0 <= k <= min(a.len(), b.len())` such that
///   the last `k` symbols of `a` equal the first `k` symbols of `b`;
/// - returns `0` when no positive `k` matches (including empty inputs);
/// - is not symmetric: `overlap(a, b)` and `overlap(b, a)` are independent;
/// - is pure: same inputs, same answer, no side effects.
///
/// Implementations must be `Sync` so one oracle can fill matrix rows from
/// several threads.
pub trait OverlapOracle: Sync {
    /// Longest suffix of `a` that is also a prefix of `b`.
    fn overlap(&self, a: &[u8], b: &[u8]) -> usize;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;
}
