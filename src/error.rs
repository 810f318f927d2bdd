//! Error taxonomy for loading fragments and configuring a solve.
//!
//! Every variant is a configuration problem detected before (or while
//! partitioning) the search; the search itself is total over well-formed
//! input and never returns an error.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type SolveResult<T> = Result<T, SolveError>;

/// Fatal configuration errors. No partial result accompanies any of them.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("cannot read fragments from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fragment on line {line} is empty")]
    EmptyFragment { line: usize },

    #[error("{count} fragments exceed the configured capacity of {capacity}")]
    TooManyFragments { count: usize, capacity: usize },

    #[error("fragment capacity {requested} exceeds the supported maximum of {max}")]
    CapacityTooLarge { requested: usize, max: usize },

    #[error("cutoff depth {cutoff} is outside [1, {fragments}]")]
    InvalidCutoff { cutoff: usize, fragments: usize },

    #[error("worker count must be at least 1")]
    InvalidWorkers,

    #[error("work pool exceeded its capacity of {capacity} subproblems")]
    PoolOverflow { capacity: usize },

    #[cfg(feature = "parallel")]
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
