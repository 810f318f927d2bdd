use std::io::Write;

use ssp_bnb::{Fragments, SolveError, SolverBuilder, MAX_FRAGMENTS};
use tempfile::NamedTempFile;

fn write_fragments(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_one_fragment_per_line() {
    let file = write_fragments("ATTAGACCTG\r\nCCTGCCGGAG\nAGACCTGCCG\n");
    let fragments = Fragments::from_path(file.path()).unwrap();
    assert_eq!(fragments.len(), 3);
    assert_eq!(fragments.get(0), b"ATTAGACCTG");
    assert_eq!(fragments.get(2), b"AGACCTGCCG");
}

#[test]
fn loaded_file_solves_end_to_end() {
    let file = write_fragments("AB\nBC\nCD\n");
    let solution = SolverBuilder::new(Fragments::from_path(file.path()).unwrap())
        .cutoff_depth(1)
        .build()
        .unwrap()
        .solve()
        .unwrap();
    assert_eq!(solution.best_string, b"ABCD");
}

#[test]
fn empty_file_is_an_empty_fragment_list() {
    let file = write_fragments("");
    let fragments = Fragments::from_path(file.path()).unwrap();
    assert!(fragments.is_empty());
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    match Fragments::from_path(&path) {
        Err(SolveError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn blank_line_is_rejected_with_its_line_number() {
    let file = write_fragments("AB\n\nBC\n");
    assert!(matches!(
        Fragments::from_path(file.path()),
        Err(SolveError::EmptyFragment { line: 2 })
    ));
}

#[test]
fn capacity_is_enforced() {
    let file = write_fragments("A\nB\nC\n");
    assert!(matches!(
        Fragments::from_path_with_capacity(file.path(), 2),
        Err(SolveError::TooManyFragments {
            count: 3,
            capacity: 2
        })
    ));
    assert!(matches!(
        Fragments::from_path_with_capacity(file.path(), MAX_FRAGMENTS + 1),
        Err(SolveError::CapacityTooLarge { .. })
    ));
}

#[test]
fn more_than_max_fragments_is_rejected() {
    let items = vec![b"A".to_vec(); MAX_FRAGMENTS + 1];
    assert!(matches!(
        Fragments::new(items),
        Err(SolveError::TooManyFragments { .. })
    ));
}

#[test]
fn cutoff_outside_range_is_rejected() {
    let fragments = Fragments::from_strs(&["AB", "BC"]).unwrap();
    assert!(matches!(
        SolverBuilder::new(fragments.clone()).cutoff_depth(0).build(),
        Err(SolveError::InvalidCutoff { cutoff: 0, fragments: 2 })
    ));
    assert!(matches!(
        SolverBuilder::new(fragments).cutoff_depth(3).build(),
        Err(SolveError::InvalidCutoff { cutoff: 3, fragments: 2 })
    ));
}

#[test]
fn zero_workers_is_rejected() {
    let fragments = Fragments::from_strs(&["AB", "BC"]).unwrap();
    assert!(matches!(
        SolverBuilder::new(fragments).partitioned().workers(0).build(),
        Err(SolveError::InvalidWorkers)
    ));
}

#[test]
fn pool_overflow_is_fatal() {
    // Disjoint fragments admit every depth-2 prefix: 4·3 = 12 units.
    let fragments = Fragments::from_strs(&["W", "X", "Y", "Z"]).unwrap();
    let result = SolverBuilder::new(fragments)
        .cutoff_depth(2)
        .seed_with_greedy(false)
        .pool_capacity(5)
        .build()
        .unwrap()
        .solve();
    assert!(matches!(result, Err(SolveError::PoolOverflow { capacity: 5 })));
}
