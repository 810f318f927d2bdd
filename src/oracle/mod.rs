//! Reference [`OverlapOracle`](crate::traits::OverlapOracle) implementations.
//!
//! - [`naive`]  : tries candidate lengths from `min(len)` down to 1, stops at the first match.
//! - [`prefix`] : prefix-function automaton over `b`, fed the symbols of `a`.
//!
//! Both return identical values for every input; they differ only in cost.

pub mod naive;
pub mod prefix;

pub use naive::NaiveScan;
pub use prefix::PrefixFunction;

use crate::traits::OverlapOracle;

/// Oracle selector carried by [`SolverConfig`](crate::builder::SolverConfig).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OracleKind {
    #[default]
    NaiveScan,
    PrefixFunction,
}

impl OracleKind {
    /// Borrow the oracle this selector names.
    pub fn oracle(self) -> &'static dyn OverlapOracle {
        match self {
            OracleKind::NaiveScan => &NaiveScan,
            OracleKind::PrefixFunction => &PrefixFunction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_resolve_to_their_oracles() {
        assert_eq!(OracleKind::NaiveScan.oracle().name(), "naive");
        assert_eq!(OracleKind::PrefixFunction.oracle().name(), "prefix-function");
        assert_eq!(OracleKind::default(), OracleKind::NaiveScan);
    }
}
