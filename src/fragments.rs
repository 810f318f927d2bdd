//! Fragment list: the immutable input of a solve.
//!
//! Fragments are identified by their position `0..n`. They are validated once
//! at load time (non-empty, count within capacity) and never mutated after.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{SolveError, SolveResult};
use crate::frame::MAX_FRAGMENTS;

/// Ordered, validated list of fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    items: Vec<Vec<u8>>,
}

impl Fragments {
    /// Validate an in-memory list against the default capacity.
    pub fn new(items: Vec<Vec<u8>>) -> SolveResult<Self> {
        Self::with_capacity_limit(items, MAX_FRAGMENTS)
    }

    /// Validate an in-memory list against an explicit capacity
    /// (at most [`MAX_FRAGMENTS`]).
    pub fn with_capacity_limit(items: Vec<Vec<u8>>, capacity: usize) -> SolveResult<Self> {
        if capacity > MAX_FRAGMENTS {
            return Err(SolveError::CapacityTooLarge {
                requested: capacity,
                max: MAX_FRAGMENTS,
            });
        }
        if items.len() > capacity {
            return Err(SolveError::TooManyFragments {
                count: items.len(),
                capacity,
            });
        }
        if let Some(idx) = items.iter().position(|f| f.is_empty()) {
            return Err(SolveError::EmptyFragment { line: idx + 1 });
        }
        Ok(Self { items })
    }

    /// Convenience for literal lists.
    pub fn from_strs<S: AsRef<str>>(items: &[S]) -> SolveResult<Self> {
        Self::new(
            items
                .iter()
                .map(|s| s.as_ref().as_bytes().to_vec())
                .collect(),
        )
    }

    /// One fragment per line. `\n` and `\r\n` terminators are stripped.
    ///
    /// Read failures are reported against the pseudo-path `<stream>`.
    pub fn from_reader<R: BufRead>(reader: R, capacity: usize) -> SolveResult<Self> {
        let items = read_lines(reader).map_err(|source| SolveError::Io {
            path: "<stream>".into(),
            source,
        })?;
        Self::with_capacity_limit(items, capacity)
    }

    /// Read a fragment file from disk with the default capacity.
    pub fn from_path<P: AsRef<Path>>(path: P) -> SolveResult<Self> {
        Self::from_path_with_capacity(path, MAX_FRAGMENTS)
    }

    /// Read a fragment file from disk with an explicit capacity.
    pub fn from_path_with_capacity<P: AsRef<Path>>(path: P, capacity: usize) -> SolveResult<Self> {
        let path = path.as_ref();
        let io_err = |source| SolveError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let items = read_lines(BufReader::new(file)).map_err(io_err)?;
        let fragments = Self::with_capacity_limit(items, capacity)?;
        tracing::debug!(
            path = %path.display(),
            fragments = fragments.len(),
            "loaded fragments"
        );
        Ok(fragments)
    }

    /// Number of fragments `n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Symbols of fragment `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> &[u8] {
        &self.items[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.items.iter().map(Vec::as_slice)
    }

    /// Length of the naive concatenation of every fragment.
    pub fn total_len(&self) -> usize {
        self.items.iter().map(Vec::len).sum()
    }
}

fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<Vec<u8>>> {
    let mut items = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        items.push(line);
    }
    Ok(items)
}

impl std::ops::Index<usize> for Fragments {
    type Output = [u8];

    fn index(&self, idx: usize) -> &[u8] {
        self.get(idx)
    }
}
