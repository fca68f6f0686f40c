use std::fmt::{Display, Error, Formatter};

use crate::engine::{SearchEngine, pattern_label};
use crate::{Alphabet, Automaton, SearchError, SearchResult, Symbol, UndefinedTransition, build_automaton};

//------------------------------------------------------------------------------
// Automaton engine
/// Table-driven matcher: one transition per symbol, no backtracking
#[derive(Debug, Clone)]
pub struct AutomatonEngine<T> {
    automaton: Automaton<T>,
}

impl<T: Symbol> AutomatonEngine<T> {
    /// Builds the automaton of `pattern` over `alphabet`
    pub fn new(pattern: &[T], alphabet: &Alphabet<T>) -> Result<Self, SearchError> {
        Ok(Self::from_automaton(build_automaton(pattern, alphabet)?))
    }

    /// Wraps an automaton built elsewhere
    pub fn from_automaton(automaton: Automaton<T>) -> Self {
        Self { automaton }
    }

    /// The automaton driving the search
    pub fn automaton(&self) -> &Automaton<T> {
        &self.automaton
    }
}

/// Runs `automaton` over `sequence`.
///
/// Before each symbol is consumed, an accepting state records a match ending just before
/// it; a last check after the loop catches a match ending on the final symbol. The
/// comparison count is the number of transitions taken. A symbol with no transition stops
/// the scan, keeping what was found so far.
pub fn scan<T: Symbol>(automaton: &Automaton<T>, sequence: &[T]) -> SearchResult {
    let m = automaton.pattern().len();
    let mut result = SearchResult::default();
    let mut state = automaton.initial_state();

    for (offset, symbol) in sequence.iter().enumerate() {
        if automaton.is_accepting(state) {
            result.occurrences.push(offset - m);
        }
        match automaton.next_state(state, symbol) {
            Some(next) => {
                state = next;
                result.comparisons += 1;
            }
            None => {
                let undefined = UndefinedTransition {
                    offset,
                    state,
                    symbol: symbol.label(),
                };
                warn!("automaton search truncated: {undefined}");
                result.truncated = Some(undefined);
                break;
            }
        }
    }

    // a truncated scan already checked the state it stopped in
    if result.is_complete() && automaton.is_accepting(state) {
        result.occurrences.push(sequence.len() - m);
    }

    trace!(
        "automaton search done: {} occurrences, {} comparisons",
        result.count(),
        result.comparisons
    );
    result
}

impl<T: Symbol> SearchEngine<T> for AutomatonEngine<T> {
    fn search(&self, sequence: &[T]) -> SearchResult {
        scan(&self.automaton, sequence)
    }
}

impl<T: Symbol> Display for AutomatonEngine<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "(Automaton: {}|{} states|{} symbols)",
            pattern_label(self.automaton.pattern()),
            self.automaton.num_states(),
            self.automaton.alphabet().len()
        )
    }
}
