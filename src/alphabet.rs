//! Working alphabet of a sequence.

use std::ops::Index;

use crate::Symbol;

/// Sorted set of distinct printable symbols.
///
/// The order is stable (ascending) so that automata built over the same alphabet always
/// lay out their transitions the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<T> {
    symbols: Vec<T>,
}

impl<T: Symbol> Alphabet<T> {
    /// Builds an alphabet from arbitrary symbols, keeping every distinct one.
    ///
    /// Unlike [`extract_alphabet`], nothing is filtered out.
    pub fn from_symbols(symbols: impl IntoIterator<Item = T>) -> Self {
        let mut symbols: Vec<T> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// Position of `symbol` in the alphabet, if present
    pub fn index_of(&self, symbol: &T) -> Option<usize> {
        self.symbols.binary_search(symbol).ok()
    }

    /// Whether `symbol` belongs to the alphabet
    pub fn contains(&self, symbol: &T) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no symbol survived extraction
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.symbols.iter()
    }

    /// Sorted symbols
    pub fn as_slice(&self) -> &[T] {
        &self.symbols
    }
}

impl<T> Index<usize> for Alphabet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.symbols[index]
    }
}

impl<'a, T: Symbol> IntoIterator for &'a Alphabet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Derives the working alphabet of `source`: its distinct printable symbols, line
/// terminators excluded, in ascending order.
///
/// An empty source yields an empty alphabet; building an automaton over it fails with
/// [`SearchError::EmptyAlphabet`](crate::SearchError::EmptyAlphabet).
pub fn extract_alphabet<T: Symbol>(source: impl IntoIterator<Item = T>) -> Alphabet<T> {
    let alphabet = Alphabet::from_symbols(
        source
            .into_iter()
            .filter(|symbol| symbol.is_printable() && !symbol.is_line_terminator()),
    );
    debug!("extracted alphabet of {} symbols", alphabet.len());
    alphabet
}
