//! seqmatch finds every occurrence of a pattern in a sequence of symbols.
//!
//! It is aimed at DNA-like text but works over any `char` or `u8` sequence. Three
//! interchangeable matchers are provided, each instrumented with its own comparison count:
//!
//! - **naive**: align the pattern at every offset and compare symbol by symbol
//! - **kmp**: Knuth-Morris-Pratt, backtracking through the failure table on mismatches
//! - **automaton**: a deterministic finite automaton over the sequence's alphabet, one
//!   transition per symbol read
//!
//! The automaton itself can be inspected and turned into a graph description for display.
//!
//! # Examples
//!
//! ```
//! use seqmatch::{search_automaton, search_kmp, search_naive};
//!
//! let sequence: Vec<char> = "GATTACATTA".chars().collect();
//! let pattern: Vec<char> = "TTA".chars().collect();
//!
//! let naive = search_naive(&sequence, &pattern).unwrap();
//! let kmp = search_kmp(&sequence, &pattern).unwrap();
//! let dfa = search_automaton(&sequence, &pattern).unwrap();
//!
//! assert_eq!(naive.occurrences, vec![2, 7]);
//! assert_eq!(kmp.occurrences, naive.occurrences);
//! assert_eq!(dfa.occurrences, naive.occurrences);
//! // one comparison per symbol read
//! assert_eq!(dfa.comparisons, sequence.len());
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

pub use crate::alphabet::{Alphabet, extract_alphabet};
pub use crate::automaton::{Automaton, Transition, build_automaton};
pub use crate::describe::{AutomatonGraph, EdgeKind, GraphEdge, GraphNode, describe_automaton, describe_failure_links};
pub use crate::engine::{Algorithm, SearchEngine};
pub use crate::error::{SearchError, UndefinedTransition};
pub use crate::failure::{build_failure_table, longest_border};
pub use crate::options::SeqMatchOptions;
pub use crate::output::SearchReport;
pub use crate::seqmatch::{SeqMatch, SeqMatchOutput, render_graph};

pub mod alphabet;
pub mod automaton;
pub mod describe;
pub mod engine;
mod error;
pub mod failure;
pub mod options;
pub mod output;
pub mod prelude;
pub mod reader;
mod seqmatch;

#[cfg(feature = "cli")]
pub mod completions;
#[cfg(feature = "cli")]
pub mod manpage;

//------------------------------------------------------------------------------
/// A unit of the searched alphabet.
///
/// Implemented for `char` (text) and `u8` (raw file contents).
pub trait Symbol: Copy + Eq + Ord + Hash + Debug {
    /// Whether this symbol ends a line (`\n` or `\r`)
    fn is_line_terminator(&self) -> bool;

    /// Whether this symbol belongs in an extracted alphabet
    fn is_printable(&self) -> bool;

    /// Human readable label, used for graph edges and reports
    fn label(&self) -> String;
}

impl Symbol for char {
    fn is_line_terminator(&self) -> bool {
        matches!(self, '\n' | '\r')
    }

    fn is_printable(&self) -> bool {
        !self.is_control()
    }

    fn label(&self) -> String {
        if self.is_control() {
            self.escape_default().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Symbol for u8 {
    fn is_line_terminator(&self) -> bool {
        matches!(self, b'\n' | b'\r')
    }

    fn is_printable(&self) -> bool {
        !self.is_ascii_control()
    }

    fn label(&self) -> String {
        if self.is_ascii_graphic() || *self == b' ' {
            char::from(*self).to_string()
        } else {
            self.escape_ascii().to_string()
        }
    }
}

//------------------------------------------------------------------------------
/// Outcome of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Start offsets of every occurrence, ascending, overlaps included
    pub occurrences: Vec<usize>,
    /// Elementary comparisons performed, counted according to the matcher's own rule
    pub comparisons: usize,
    /// Set when the scan stopped early on a symbol the automaton has no transition for
    pub truncated: Option<UndefinedTransition>,
}

impl SearchResult {
    /// Number of occurrences found
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }

    /// Whether the whole sequence was scanned
    pub fn is_complete(&self) -> bool {
        self.truncated.is_none()
    }
}

//------------------------------------------------------------------------------
/// Searches `pattern` by aligning it at every offset of `sequence`.
///
/// Every symbol comparison counts, including the one that fails. Offsets where the pattern
/// would run past the end of the sequence are never tried.
pub fn search_naive<T: Symbol>(sequence: &[T], pattern: &[T]) -> Result<SearchResult, SearchError> {
    let engine = engine::naive::NaiveEngine::new(pattern)?;
    Ok(engine.search(sequence))
}

/// Searches `pattern` with Knuth-Morris-Pratt, falling back through the failure table.
///
/// One comparison is counted per symbol equality test.
pub fn search_kmp<T: Symbol>(sequence: &[T], pattern: &[T]) -> Result<SearchResult, SearchError> {
    let engine = engine::kmp::KmpEngine::new(pattern)?;
    Ok(engine.search(sequence))
}

/// Searches `pattern` with an automaton built over the alphabet of `sequence`.
///
/// One comparison is counted per symbol consumed. An empty sequence yields an empty result
/// without building anything.
pub fn search_automaton<T: Symbol>(sequence: &[T], pattern: &[T]) -> Result<SearchResult, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }
    if sequence.is_empty() {
        return Ok(SearchResult::default());
    }
    let alphabet = extract_alphabet(sequence.iter().copied());
    let automaton = build_automaton(pattern, &alphabet)?;
    Ok(search_with_automaton(sequence, &automaton))
}

/// Runs an already built automaton over `sequence`.
///
/// The result is truncated if `sequence` holds a symbol outside the automaton's alphabet.
pub fn search_with_automaton<T: Symbol>(sequence: &[T], automaton: &Automaton<T>) -> SearchResult {
    engine::automaton::scan(automaton, sequence)
}
