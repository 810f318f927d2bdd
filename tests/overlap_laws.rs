use proptest::prelude::*;
use ssp_bnb::oracle::{NaiveScan, PrefixFunction};
use ssp_bnb::{Fragments, OverlapMatrix, OverlapOracle};

fn symbols() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"AB".to_vec()), 0..12)
}

proptest! {
    #[test]
    fn oracles_agree(a in symbols(), b in symbols()) {
        prop_assert_eq!(NaiveScan.overlap(&a, &b), PrefixFunction.overlap(&a, &b));
    }

    #[test]
    fn overlap_is_a_maximal_suffix_prefix_match(a in symbols(), b in symbols()) {
        let k = NaiveScan.overlap(&a, &b);
        prop_assert!(k <= a.len().min(b.len()));
        prop_assert_eq!(&a[a.len() - k..], &b[..k]);
        for longer in k + 1..=a.len().min(b.len()) {
            prop_assert_ne!(&a[a.len() - longer..], &b[..longer]);
        }
    }

    #[test]
    fn self_overlap_is_full_length(a in symbols()) {
        prop_assert_eq!(PrefixFunction.overlap(&a, &a), a.len());
    }

    #[test]
    fn matrix_mirrors_the_oracle_off_the_diagonal(
        items in prop::collection::vec(prop::collection::vec(prop::sample::select(b"AB".to_vec()), 1..8), 1..6)
    ) {
        let fragments = Fragments::new(items.clone()).unwrap();
        let matrix = OverlapMatrix::build(&fragments, &PrefixFunction);
        prop_assert_eq!(matrix.len(), items.len());
        for i in 0..items.len() {
            for j in 0..items.len() {
                let expected = if i == j { 0 } else { NaiveScan.overlap(&items[i], &items[j]) };
                prop_assert_eq!(matrix.get(i, j), expected);
            }
        }
    }
}

#[test]
fn overlap_is_asymmetric() {
    assert_eq!(NaiveScan.overlap(b"ABC", b"BCD"), 2);
    assert_eq!(NaiveScan.overlap(b"BCD", b"ABC"), 0);
}

#[test]
fn empty_inputs_overlap_nothing() {
    assert_eq!(NaiveScan.overlap(b"", b"ABC"), 0);
    assert_eq!(PrefixFunction.overlap(b"ABC", b""), 0);
}

#[test]
fn oracles_report_their_names() {
    assert_eq!(NaiveScan.name(), "naive");
    assert_eq!(PrefixFunction.name(), "prefix-function");
}
