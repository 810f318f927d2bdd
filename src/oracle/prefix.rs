//! Prefix-function (Knuth–Morris–Pratt) overlap.
//!
//! Build the failure table of `b`, then run the matching automaton over the
//! symbols of `a`. The automaton state after the last symbol of `a` is the
//! length of the longest prefix of `b` that ends exactly at the end of `a`,
//! which is the overlap. A complete match of `b` in the middle of `a` falls
//! back through the failure table before the next symbol is consumed, so the
//! state never exceeds `|b|`, and it never exceeds `|a|` because it grows by at
//! most one per consumed symbol.

use crate::traits::OverlapOracle;

/// Linear-time overlap via the prefix function of the second argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixFunction;

/// `pi[i]` = length of the longest proper prefix of `s[..=i]` that is also its suffix.
pub fn prefix_function(s: &[u8]) -> Vec<usize> {
    let mut pi = vec![0usize; s.len()];
    let mut k = 0usize;
    for i in 1..s.len() {
        while k > 0 && s[i] != s[k] {
            k = pi[k - 1];
        }
        if s[i] == s[k] {
            k += 1;
        }
        pi[i] = k;
    }
    pi
}

impl OverlapOracle for PrefixFunction {
    fn overlap(&self, a: &[u8], b: &[u8]) -> usize {
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        let pi = prefix_function(b);
        let mut k = 0usize;
        for &symbol in a {
            if k == b.len() {
                k = pi[k - 1];
            }
            while k > 0 && b[k] != symbol {
                k = pi[k - 1];
            }
            if b[k] == symbol {
                k += 1;
            }
        }
        k
    }

    fn name(&self) -> &'static str {
        "prefix-function"
    }
}
