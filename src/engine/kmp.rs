use std::fmt::{Display, Error, Formatter};

use crate::engine::{SearchEngine, pattern_label};
use crate::failure::build_failure_table;
use crate::{SearchError, SearchResult, Symbol};

//------------------------------------------------------------------------------
// KMP engine
/// Knuth-Morris-Pratt matcher, the backtracking form of the automaton
#[derive(Debug, Clone)]
pub struct KmpEngine<T> {
    pattern: Vec<T>,
    failure: Vec<usize>,
}

impl<T: Symbol> KmpEngine<T> {
    /// Precomputes the failure table of `pattern`
    pub fn new(pattern: &[T]) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        Ok(Self {
            pattern: pattern.to_vec(),
            failure: build_failure_table(pattern),
        })
    }

    /// The failure table the engine backtracks through
    pub fn failure_table(&self) -> &[usize] {
        &self.failure
    }
}

impl<T: Symbol> SearchEngine<T> for KmpEngine<T> {
    /// `i` walks the sequence, `j` the pattern. Every equality test counts once, successful
    /// or not. A mismatch with `j > 0` falls back to `failure[j - 1]` and retests the same
    /// sequence symbol, so the total stays below `2n`.
    fn search(&self, sequence: &[T]) -> SearchResult {
        let m = self.pattern.len();
        let mut result = SearchResult::default();
        let (mut i, mut j) = (0, 0);

        while i < sequence.len() {
            result.comparisons += 1;
            if sequence[i] == self.pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    result.occurrences.push(i - m);
                    j = self.failure[m - 1];
                }
            } else if j != 0 {
                j = self.failure[j - 1];
            } else {
                i += 1;
            }
        }

        trace!(
            "kmp search done: {} occurrences, {} comparisons",
            result.count(),
            result.comparisons
        );
        result
    }
}

impl<T: Symbol> Display for KmpEngine<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(KMP: {})", pattern_label(&self.pattern))
    }
}
