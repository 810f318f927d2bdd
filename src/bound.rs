//! Nearest-overlap greedy tour used to seed the pruning bound.
//!
//! Starting at fragment 0, repeatedly append the unused fragment with the
//! largest overlap against the tour's last fragment, ties going to the lowest
//! index. The result is one complete ordering, so its length is a valid upper
//! bound and its string a valid fallback answer.

use crate::best::BestSolution;
use crate::fragments::Fragments;
use crate::frame::SearchFrame;
use crate::matrix::OverlapMatrix;

/// Greedy nearest-overlap ordering over a precomputed matrix.
pub fn greedy_tour(fragments: &Fragments, matrix: &OverlapMatrix) -> BestSolution {
    let n = fragments.len();
    if n == 0 {
        return BestSolution {
            len: 0,
            order: Vec::new(),
            merged: Vec::new(),
        };
    }

    let mut frame = SearchFrame::root(fragments, 0);
    for _ in 1..n {
        let last = frame
            .last()
            .expect("greedy frame always holds the start fragment");
        let used = frame.used();
        let row = matrix.row(last);
        // max_by_key keeps the last maximum; iterate in reverse so the lowest index wins.
        let next = (0..n)
            .rev()
            .filter(|&c| !used.contains(c))
            .max_by_key(|&c| row[c])
            .expect("fewer placed fragments than n leaves one unused");
        frame.push(next, &fragments.get(next)[row[next]..]);
    }

    tracing::debug!(len = frame.merged_len(), "greedy bound");
    BestSolution {
        len: frame.merged_len(),
        order: frame.order().to_vec(),
        merged: frame.merged().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NaiveScan;

    fn tour(items: &[&str]) -> BestSolution {
        let fragments = Fragments::from_strs(items).unwrap();
        let matrix = OverlapMatrix::build(&fragments, &NaiveScan);
        greedy_tour(&fragments, &matrix)
    }

    #[test]
    fn follows_the_largest_overlap() {
        let t = tour(&["AB", "XY", "BC"]);
        assert_eq!(t.order, vec![0, 2, 1]);
        assert_eq!(t.merged, b"ABCXY");
        assert_eq!(t.len, 5);
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        // Fragments 1 and 2 both overlap "AB" by one symbol.
        let t = tour(&["AB", "BX", "BY"]);
        assert_eq!(t.order, vec![0, 1, 2]);
        assert_eq!(t.merged, b"ABXBY");
    }

    #[test]
    fn degenerate_inputs() {
        let t = tour(&[]);
        assert_eq!(t.len, 0);
        assert!(t.merged.is_empty());

        let t = tour(&["XYZ"]);
        assert_eq!(t.len, 3);
        assert_eq!(t.merged, b"XYZ");
    }

    #[test]
    fn length_matches_the_overlap_chain() {
        let fragments = Fragments::from_strs(&["ATTAG", "TAGCC", "GCCTA", "CTAAT"]).unwrap();
        let matrix = OverlapMatrix::build(&fragments, &NaiveScan);
        let t = greedy_tour(&fragments, &matrix);
        let overlaps: usize = t.order.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
        assert_eq!(t.len, fragments.total_len() - overlaps);
        assert_eq!(t.merged.len(), t.len);
    }
}
