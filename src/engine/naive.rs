use std::fmt::{Display, Error, Formatter};

use crate::engine::{SearchEngine, pattern_label};
use crate::{SearchError, SearchResult, Symbol};

//------------------------------------------------------------------------------
// Naive engine
/// Tries every in-bounds offset and compares symbol by symbol
#[derive(Debug, Clone)]
pub struct NaiveEngine<T> {
    pattern: Vec<T>,
}

impl<T: Symbol> NaiveEngine<T> {
    /// Fails on an empty pattern
    pub fn new(pattern: &[T]) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        Ok(Self {
            pattern: pattern.to_vec(),
        })
    }
}

impl<T: Symbol> SearchEngine<T> for NaiveEngine<T> {
    /// Tries every offset in `0..=n-m`, stopping at the first mismatch of each alignment.
    /// Each compared symbol counts, the mismatching one included.
    fn search(&self, sequence: &[T]) -> SearchResult {
        let m = self.pattern.len();
        let mut result = SearchResult::default();
        if m > sequence.len() {
            return result;
        }

        for start in 0..=sequence.len() - m {
            let mut matched = true;
            for (expected, actual) in self.pattern.iter().zip(&sequence[start..start + m]) {
                result.comparisons += 1;
                if expected != actual {
                    matched = false;
                    break;
                }
            }
            if matched {
                result.occurrences.push(start);
            }
        }

        trace!(
            "naive search done: {} occurrences, {} comparisons",
            result.count(),
            result.comparisons
        );
        result
    }
}

impl<T: Symbol> Display for NaiveEngine<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Naive: {})", pattern_label(&self.pattern))
    }
}
