//! Errors raised while building matchers and running searches.

use serde::Serialize;
use thiserror::Error;

/// Construction-time errors. Any of these prevents a search from starting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The pattern has no symbols, so there is nothing to match
    #[error("the pattern must contain at least one symbol")]
    EmptyPattern,
    /// No symbol could be extracted from the input, so no automaton can be built
    #[error("the alphabet is empty, cannot build an automaton")]
    EmptyAlphabet,
}

/// A symbol of the sequence had no transition out of the current state.
///
/// This only happens when the automaton was built over an alphabet derived from another
/// source than the sequence being searched. The scan stops at `offset`; occurrences found
/// before that point are still reported.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("no transition from state q{state} on symbol {symbol} at offset {offset}")]
pub struct UndefinedTransition {
    /// Offset of the offending symbol in the sequence
    pub offset: usize,
    /// Automaton state the scan was in
    pub state: usize,
    /// Printable label of the offending symbol
    pub symbol: String,
}
