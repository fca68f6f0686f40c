//! Search engines.
//!
//! Every engine owns what it derived from the pattern (failure table, automaton...) and can
//! be run over any number of sequences; nothing is carried over from one search to the next.

use std::fmt::{Display, Formatter};

use crate::{Alphabet, SearchError, SearchResult, Symbol};

/// Table-driven automaton engine
pub mod automaton;
/// Knuth-Morris-Pratt
pub mod kmp;
/// Brute force
pub mod naive;

use self::automaton::AutomatonEngine;
use self::kmp::KmpEngine;
use self::naive::NaiveEngine;

/// A strategy finding every occurrence of a fixed pattern in a sequence
pub trait SearchEngine<T: Symbol>: Display {
    /// Scans `sequence` and reports occurrences together with the comparison count
    fn search(&self, sequence: &[T]) -> SearchResult;
}

//------------------------------------------------------------------------------
/// Search algorithm to use
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Compare the pattern at every offset
    Naive,
    /// Knuth-Morris-Pratt, backtracking through the failure table
    #[default]
    Kmp,
    /// Deterministic automaton over the sequence's alphabet
    Automaton,
}

impl Algorithm {
    /// Every algorithm, in report order
    pub const ALL: [Algorithm; 3] = [Algorithm::Naive, Algorithm::Kmp, Algorithm::Automaton];

    /// Display name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive",
            Algorithm::Kmp => "KMP",
            Algorithm::Automaton => "Automaton",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//------------------------------------------------------------------------------
/// Builds a boxed engine for an algorithm chosen at runtime.
///
/// The automaton engine needs an alphabet; the others ignore it.
pub struct SearchEngineBuilder<T> {
    pattern: Vec<T>,
    algorithm: Algorithm,
    alphabet: Option<Alphabet<T>>,
}

impl<T: Symbol + 'static> SearchEngineBuilder<T> {
    /// Starts a builder for `pattern`, using the default algorithm
    pub fn new(pattern: &[T]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            algorithm: Algorithm::default(),
            alphabet: None,
        }
    }

    /// Sets the algorithm
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the alphabet the automaton is built over
    pub fn alphabet(mut self, alphabet: Alphabet<T>) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Builds the engine, validating the pattern (and the alphabet for the automaton)
    pub fn build(self) -> Result<Box<dyn SearchEngine<T>>, SearchError> {
        let engine: Box<dyn SearchEngine<T>> = match self.algorithm {
            Algorithm::Naive => Box::new(NaiveEngine::new(&self.pattern)?),
            Algorithm::Kmp => Box::new(KmpEngine::new(&self.pattern)?),
            Algorithm::Automaton => {
                let alphabet = self.alphabet.unwrap_or_else(|| Alphabet::from_symbols([]));
                Box::new(AutomatonEngine::new(&self.pattern, &alphabet)?)
            }
        };
        debug!("engine: {engine}");
        Ok(engine)
    }
}

/// Renders a pattern through its symbol labels
pub(crate) fn pattern_label<T: Symbol>(pattern: &[T]) -> String {
    pattern.iter().map(Symbol::label).collect()
}
