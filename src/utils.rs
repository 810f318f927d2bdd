//! Assorted utilities and helpers.

/// Pool units per worker the default cutoff aims for, so that uneven
/// subtrees still balance across threads.
pub const UNITS_PER_WORKER: usize = 8;

/// Pick a cutoff depth for `n` fragments and `workers` threads.
///
/// Returns the smallest depth `d` whose count of ordered prefixes
/// `n·(n-1)···(n-d+1)` reaches `UNITS_PER_WORKER × workers`, capped at `n`.
/// This is a heuristic used by the builder when a partitioned solve is
/// requested without an explicit cutoff.
pub fn default_cutoff_depth(n: usize, workers: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    let target = UNITS_PER_WORKER.saturating_mul(workers.max(1));
    let mut prefixes = 1usize;
    for depth in 1..=n {
        prefixes = prefixes.saturating_mul(n - depth + 1);
        if prefixes >= target {
            return depth;
        }
    }
    n
}

/// Number of threads the ambient worker pool would use.
#[cfg(feature = "parallel")]
pub fn ambient_workers() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "parallel"))]
pub fn ambient_workers() -> usize {
    1
}
