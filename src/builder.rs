//! Solve configuration and its fluent builder.

use crate::engine::Pruning;
use crate::error::{SolveError, SolveResult};
use crate::fragments::Fragments;
use crate::oracle::OracleKind;
use crate::partition::DEFAULT_POOL_CAPACITY;
use crate::solver::Solver;
use crate::utils::{ambient_workers, default_cutoff_depth};

/// How the search tree is traversed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// One depth-first traversal from every starting fragment.
    #[default]
    Sequential,
    /// Partition to a cutoff depth, then dispatch the pool.
    /// `None` picks [`default_cutoff_depth`] for the worker count.
    Partitioned { cutoff_depth: Option<usize> },
}

/// Everything that shapes a solve apart from the fragments themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub mode: SearchMode,
    /// Dedicated worker threads for dispatch; `None` uses the ambient pool.
    pub workers: Option<usize>,
    pub pruning: Pruning,
    /// Seed the bound with the greedy tour instead of "infinity".
    pub seed_with_greedy: bool,
    pub oracle: OracleKind,
    pub pool_capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::Sequential,
            workers: None,
            pruning: Pruning::Exact,
            seed_with_greedy: true,
            oracle: OracleKind::NaiveScan,
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }
}

impl SolverConfig {
    /// Check the configuration against `n` fragments and resolve the cutoff.
    ///
    /// An empty fragment list accepts any cutoff: it has nothing to partition.
    pub fn validate(mut self, n: usize) -> SolveResult<Self> {
        if self.workers == Some(0) {
            return Err(SolveError::InvalidWorkers);
        }
        if let SearchMode::Partitioned { cutoff_depth } = self.mode {
            let cutoff = match cutoff_depth {
                Some(d) => d,
                None => default_cutoff_depth(n, self.workers.unwrap_or_else(ambient_workers)),
            };
            if n > 0 && !(1..=n).contains(&cutoff) {
                return Err(SolveError::InvalidCutoff {
                    cutoff,
                    fragments: n,
                });
            }
            self.mode = SearchMode::Partitioned {
                cutoff_depth: Some(cutoff),
            };
        }
        Ok(self)
    }
}

pub struct SolverBuilder {
    fragments: Fragments,
    config: SolverConfig,
}

impl SolverBuilder {
    pub fn new(fragments: Fragments) -> Self {
        Self {
            fragments,
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Partition at an explicit depth.
    pub fn cutoff_depth(mut self, cutoff_depth: usize) -> Self {
        self.config.mode = SearchMode::Partitioned {
            cutoff_depth: Some(cutoff_depth),
        };
        self
    }

    /// Partition at a depth chosen from the worker count.
    pub fn partitioned(mut self) -> Self {
        if !matches!(self.config.mode, SearchMode::Partitioned { .. }) {
            self.config.mode = SearchMode::Partitioned { cutoff_depth: None };
        }
        self
    }

    pub fn sequential(mut self) -> Self {
        self.config.mode = SearchMode::Sequential;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = Some(workers);
        self
    }

    pub fn pruning(mut self, pruning: Pruning) -> Self {
        self.config.pruning = pruning;
        self
    }

    pub fn seed_with_greedy(mut self, seed: bool) -> Self {
        self.config.seed_with_greedy = seed;
        self
    }

    pub fn oracle(mut self, oracle: OracleKind) -> Self {
        self.config.oracle = oracle;
        self
    }

    pub fn pool_capacity(mut self, capacity: usize) -> Self {
        self.config.pool_capacity = capacity;
        self
    }

    pub fn build(self) -> SolveResult<Solver> {
        Solver::with_config(self.fragments, self.config)
    }
}
