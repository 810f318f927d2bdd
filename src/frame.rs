//! Search-frame data structures used by the engine.
//!
//! A [`SearchFrame`] is a prefix of a fragment permutation together with the
//! superstring that prefix merges to. Frames are extended and shrunk in place
//! while the engine backtracks, and cloned only when the partitioner snapshots
//! one into the work pool.

use crate::fragments::Fragments;
use crate::matrix::OverlapMatrix;

/// Width of the used-set bitset, hence the hard fragment limit.
pub const MAX_FRAGMENTS: usize = u128::BITS as usize;

/// Fixed-width set of fragment indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FragmentSet(u128);

impl FragmentSet {
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub fn contains(self, idx: usize) -> bool {
        debug_assert!(idx < MAX_FRAGMENTS);
        self.0 & (1u128 << idx) != 0
    }

    #[inline]
    pub fn insert(&mut self, idx: usize) {
        debug_assert!(idx < MAX_FRAGMENTS);
        self.0 |= 1u128 << idx;
    }

    #[inline]
    pub fn remove(&mut self, idx: usize) {
        debug_assert!(idx < MAX_FRAGMENTS);
        self.0 &= !(1u128 << idx);
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let idx = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(idx)
        })
    }
}

/// Partial ordering of fragments and its merged superstring.
///
/// Invariants (checked in debug builds):
/// - `order` holds distinct indices and `used` is exactly that set;
/// - `merged` is fragment `order[0]` followed, for every later fragment `f`
///   preceded by `p`, by `f` with its first `overlap[p][f]` symbols dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFrame {
    used: FragmentSet,
    order: Vec<usize>,
    merged: Vec<u8>,
}

impl SearchFrame {
    /// Depth-1 frame holding only fragment `first`.
    pub fn root(fragments: &Fragments, first: usize) -> Self {
        let mut used = FragmentSet::empty();
        used.insert(first);
        let mut order = Vec::with_capacity(fragments.len());
        order.push(first);
        Self {
            used,
            order,
            merged: fragments.get(first).to_vec(),
        }
    }

    /// Number of fragments placed so far.
    #[inline]
    pub fn depth(&self) -> usize {
        self.order.len()
    }

    /// Most recently appended fragment, `None` for an empty frame.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.order.last().copied()
    }

    #[inline]
    pub fn used(&self) -> FragmentSet {
        self.used
    }

    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[inline]
    pub fn merged(&self) -> &[u8] {
        &self.merged
    }

    #[inline]
    pub fn merged_len(&self) -> usize {
        self.merged.len()
    }

    /// Append fragment `next`, of which only `tail` (the part beyond the
    /// overlap with the current last fragment) extends the superstring.
    #[inline]
    pub(crate) fn push(&mut self, next: usize, tail: &[u8]) {
        assert!(!self.used.contains(next), "fragment {next} placed twice");
        self.used.insert(next);
        self.order.push(next);
        self.merged.extend_from_slice(tail);
    }

    /// Undo the last [`push`](Self::push); `mark` is the merged length before it.
    #[inline]
    pub(crate) fn pop(&mut self, mark: usize) {
        let last = self
            .order
            .pop()
            .expect("pop must pair with a preceding push");
        self.used.remove(last);
        self.merged.truncate(mark);
        debug_assert_eq!(self.used.len(), self.order.len(), "used-set/depth mismatch");
    }

    /// Recompute the merged length from the order alone and compare.
    pub fn is_consistent(&self, fragments: &Fragments, matrix: &OverlapMatrix) -> bool {
        if self.used.len() != self.order.len() {
            return false;
        }
        let Some((&first, rest)) = self.order.split_first() else {
            return self.merged.is_empty();
        };
        let mut expected = fragments.get(first).to_vec();
        let mut prev = first;
        for &next in rest {
            let ov = matrix.get(prev, next);
            expected.extend_from_slice(&fragments.get(next)[ov..]);
            prev = next;
        }
        expected == self.merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NaiveScan;

    #[test]
    fn bitset_tracks_membership() {
        let mut set = FragmentSet::empty();
        assert!(set.is_empty());
        set.insert(0);
        set.insert(127);
        set.insert(5);
        assert!(set.contains(127));
        assert!(!set.contains(6));
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 5, 127]);
        set.remove(5);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 127]);
    }

    #[test]
    fn push_pop_restores_the_frame() {
        let fragments = Fragments::from_strs(&["AB", "BC", "CD"]).unwrap();
        let matrix = OverlapMatrix::build(&fragments, &NaiveScan);
        let mut frame = SearchFrame::root(&fragments, 0);
        let before = frame.clone();

        let mark = frame.merged_len();
        let ov = matrix.get(0, 1);
        frame.push(1, &fragments.get(1)[ov..]);
        assert_eq!(frame.merged(), b"ABC");
        assert_eq!(frame.depth(), 2);
        assert_eq!(frame.last(), Some(1));
        assert!(frame.is_consistent(&fragments, &matrix));

        frame.pop(mark);
        assert_eq!(frame, before);
    }

    #[test]
    fn tampered_frame_is_inconsistent() {
        let fragments = Fragments::from_strs(&["AB", "BC"]).unwrap();
        let matrix = OverlapMatrix::build(&fragments, &NaiveScan);
        let mut frame = SearchFrame::root(&fragments, 0);
        frame.push(1, b"BC");
        assert!(!frame.is_consistent(&fragments, &matrix));
    }

    #[test]
    #[should_panic(expected = "placed twice")]
    fn placing_a_fragment_twice_panics() {
        let fragments = Fragments::from_strs(&["AB", "BC"]).unwrap();
        let mut frame = SearchFrame::root(&fragments, 0);
        frame.push(0, b"AB");
    }
}
