//! Work-pool dispatch.
//!
//! Every [`Subproblem`] is resumed to full depth by the engine. Units share
//! nothing but the global best, so they may run in any order on any worker;
//! with the `parallel` feature they are spread over a rayon pool, otherwise
//! they run one after another. Both paths produce the same best solution.

use crate::engine::BranchAndBound;
use crate::error::{SolveError, SolveResult};
use crate::partition::{Subproblem, WorkPool};
use crate::stats::SearchStats;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs a work pool to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    workers: Option<usize>,
}

impl Dispatcher {
    /// Use the ambient (global) worker pool.
    pub fn new() -> Self {
        Self { workers: None }
    }

    /// Use a dedicated pool of `workers` threads.
    pub fn with_workers(workers: usize) -> SolveResult<Self> {
        if workers == 0 {
            return Err(SolveError::InvalidWorkers);
        }
        Ok(Self {
            workers: Some(workers),
        })
    }

    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    /// Resume every unit of `pool`; returns the merged effort counters.
    pub fn run(&self, engine: &BranchAndBound<'_>, pool: WorkPool) -> SolveResult<SearchStats> {
        let units = pool.into_units();
        tracing::debug!(units = units.len(), workers = ?self.workers, "dispatching work pool");
        run_units(engine, units, self.workers)
    }
}

fn run_unit(engine: &BranchAndBound<'_>, index: usize, unit: Subproblem) -> SearchStats {
    let span = tracing::trace_span!("unit", index);
    let _enter = span.enter();
    let mut frame = unit.into_frame();
    engine.resume(&mut frame)
}

#[cfg(feature = "parallel")]
fn run_units(
    engine: &BranchAndBound<'_>,
    units: Vec<Subproblem>,
    workers: Option<usize>,
) -> SolveResult<SearchStats> {
    let drain = || {
        units
            .into_par_iter()
            .enumerate()
            .map(|(index, unit)| run_unit(engine, index, unit))
            .reduce(SearchStats::new, SearchStats::merge)
    };
    match workers {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("ssp-worker-{i}"))
                .build()?;
            Ok(pool.install(drain))
        }
        None => Ok(drain()),
    }
}

#[cfg(not(feature = "parallel"))]
fn run_units(
    engine: &BranchAndBound<'_>,
    units: Vec<Subproblem>,
    _workers: Option<usize>,
) -> SolveResult<SearchStats> {
    Ok(units
        .into_iter()
        .enumerate()
        .map(|(index, unit)| run_unit(engine, index, unit))
        .fold(SearchStats::new(), SearchStats::merge))
}
