//! Shortest superstring search by branch-and-bound (SSP-BnB)
//!
//! This crate computes a short, and for the overlap-chain model shortest,
//! superstring of a small set of overlapping fragments, the way fragment
//! merging works in genome-assembly pipelines.
//!
//! ## Core idea
//! 1. Precompute the maximal suffix/prefix overlap of every ordered fragment
//!    pair once ([`OverlapMatrix`]).
//! 2. Seed an upper bound with a greedy nearest-overlap tour.
//! 3. Enumerate fragment orderings depth-first, merging along the overlap
//!    chain, and discard every partial ordering that can no longer beat the
//!    best complete one ([`BranchAndBound`]).
//!
//! For parallel continuation the tree can be cut at a fixed depth: the
//! partitioner emits every surviving frame at that depth as an independent
//! subproblem and the dispatcher resumes them on a worker pool. The answer is
//! identical to the sequential search for every cutoff.
//!
//! ## Quick start
//! ```
//! use ssp_bnb::{Fragments, SolverBuilder};
//!
//! let fragments = Fragments::from_strs(&["ATTAGACCTG", "CCTGCCGGAG", "AGACCTGCCG"]).unwrap();
//! let solution = SolverBuilder::new(fragments)
//!     .cutoff_depth(2)
//!     .build()
//!     .unwrap()
//!     .solve()
//!     .unwrap();
//! assert_eq!(solution.best_string_lossy(), "ATTAGACCTGCCGGAG");
//! assert_eq!(solution.best_len, 16);
//! ```
//!
//! ## Determinism
//! Orderings are ranked by merged length, then lexicographically by fragment
//! index. The reported solution is the minimum of that ranking, which is the
//! first shortest ordering an ascending-index sequential search reaches. It
//! does not depend on the cutoff, the worker count, or the greedy seed.
//!
//! ## Known simplification
//! Only suffix/prefix chaining is considered. A fragment wholly contained in
//! another is not removed beforehand, so on such inputs the overlap-chain
//! optimum can be longer than the true shortest common superstring.

pub mod best;
pub mod bound;
pub mod builder;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod fragments;
pub mod frame;
pub mod matrix;
pub mod oracle;
pub mod partition;
pub mod solver;
pub mod stats;
pub mod traits;
pub mod utils;

pub use crate::best::{BestSolution, GlobalBest};
pub use crate::builder::{SearchMode, SolverBuilder, SolverConfig};
pub use crate::engine::{BranchAndBound, Pruning};
pub use crate::error::{SolveError, SolveResult};
pub use crate::fragments::Fragments;
pub use crate::frame::{FragmentSet, SearchFrame, MAX_FRAGMENTS};
pub use crate::matrix::OverlapMatrix;
pub use crate::oracle::OracleKind;
pub use crate::solver::{Solution, Solver};
pub use crate::stats::SearchStats;
pub use crate::traits::OverlapOracle;
