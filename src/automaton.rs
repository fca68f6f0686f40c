//! Deterministic pattern-matching automaton.
//!
//! State `s` means "the last `s` symbols read are the first `s` symbols of the pattern".
//! State `0` is the initial state and state `m` (the pattern length) the only accepting one.
//! The transition table is total over `states × alphabet`.

use indexmap::IndexMap;

use crate::failure::longest_border;
use crate::{Alphabet, SearchError, Symbol};

/// A single edge of the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<T> {
    /// Source state
    pub from: usize,
    /// Symbol read
    pub symbol: T,
    /// Target state
    pub to: usize,
}

/// Pattern-matching automaton over a fixed alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton<T> {
    pattern: Vec<T>,
    alphabet: Alphabet<T>,
    /// Row-major `(m + 1) × k` table, `table[state * k + symbol_index]`
    table: Vec<usize>,
}

/// Builds the automaton of `pattern` over `alphabet`.
///
/// For each state `s` and symbol `a`: if `a` is the next expected symbol `pattern[s]`, the
/// target is `s + 1`; otherwise it is the longest proper border of `pattern[..s]` followed
/// by `a`. The accepting state `m` is handled the same way, with `pattern` followed by `a`,
/// which is what makes overlapping matches work.
///
/// ```
/// use seqmatch::{build_automaton, extract_alphabet};
///
/// let alphabet = extract_alphabet("ab".chars());
/// let pattern: Vec<char> = "aba".chars().collect();
/// let automaton = build_automaton(&pattern, &alphabet).unwrap();
///
/// assert_eq!(automaton.next_state(3, &'b'), Some(2));
/// assert_eq!(automaton.num_transitions(), 8);
/// ```
pub fn build_automaton<T: Symbol>(pattern: &[T], alphabet: &Alphabet<T>) -> Result<Automaton<T>, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }
    if alphabet.is_empty() {
        return Err(SearchError::EmptyAlphabet);
    }

    let m = pattern.len();
    let mut table = Vec::with_capacity((m + 1) * alphabet.len());
    // scratch buffer holding `pattern[..state]` followed by the symbol under test
    let mut candidate = Vec::with_capacity(m + 1);

    for state in 0..=m {
        for &symbol in alphabet {
            let target = if state < m && symbol == pattern[state] {
                state + 1
            } else {
                candidate.clear();
                candidate.extend_from_slice(&pattern[..state]);
                candidate.push(symbol);
                longest_border(&candidate)
            };
            table.push(target);
        }
    }

    debug!(
        "built automaton: {} states, {} transitions",
        m + 1,
        table.len()
    );

    Ok(Automaton {
        pattern: pattern.to_vec(),
        alphabet: alphabet.clone(),
        table,
    })
}

impl<T: Symbol> Automaton<T> {
    /// The pattern this automaton recognizes
    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// The alphabet the transition table is defined over
    pub fn alphabet(&self) -> &Alphabet<T> {
        &self.alphabet
    }

    /// Always `0`
    pub fn initial_state(&self) -> usize {
        0
    }

    /// The pattern length
    pub fn accepting_state(&self) -> usize {
        self.pattern.len()
    }

    /// All accepting states. There is exactly one.
    pub fn accepting_states(&self) -> Vec<usize> {
        vec![self.accepting_state()]
    }

    /// Whether `state` is the accepting one
    pub fn is_accepting(&self, state: usize) -> bool {
        state == self.accepting_state()
    }

    /// Number of states, `m + 1`
    pub fn num_states(&self) -> usize {
        self.pattern.len() + 1
    }

    /// All states, `0..=m`
    pub fn states(&self) -> std::ops::RangeInclusive<usize> {
        0..=self.accepting_state()
    }

    /// Number of entries in the transition table, `(m + 1) × k`
    pub fn num_transitions(&self) -> usize {
        self.table.len()
    }

    /// Target of `state` on `symbol`.
    ///
    /// Returns `None` when `symbol` is outside the alphabet or `state` is out of range.
    pub fn next_state(&self, state: usize, symbol: &T) -> Option<usize> {
        if state > self.accepting_state() {
            return None;
        }
        let column = self.alphabet.index_of(symbol)?;
        self.table.get(state * self.alphabet.len() + column).copied()
    }

    /// Every transition, state-major then in alphabet order
    pub fn transitions(&self) -> impl Iterator<Item = Transition<T>> + '_ {
        let k = self.alphabet.len();
        self.table.iter().enumerate().map(move |(i, &to)| Transition {
            from: i / k,
            symbol: self.alphabet[i % k],
            to,
        })
    }

    /// The transition function as an ordered `(state, symbol) -> state` map
    pub fn transition_map(&self) -> IndexMap<(usize, T), usize> {
        self.transitions().map(|t| ((t.from, t.symbol), t.to)).collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::extract_alphabet;

    fn automaton(pattern: &str, alphabet: &str) -> Automaton<char> {
        let pattern: Vec<char> = pattern.chars().collect();
        build_automaton(&pattern, &extract_alphabet(alphabet.chars())).unwrap()
    }

    #[test]
    fn test_ababa_table() {
        let dfa = automaton("ababa", "ab");
        assert_eq!(dfa.num_transitions(), 2 * 6);
        let expected = [
            // (on 'a', on 'b')
            (1, 0),
            (1, 2),
            (3, 0),
            (1, 4),
            (5, 0),
            (1, 4),
        ];
        for (state, &(on_a, on_b)) in expected.iter().enumerate() {
            assert_eq!(dfa.next_state(state, &'a'), Some(on_a), "q{state} on a");
            assert_eq!(dfa.next_state(state, &'b'), Some(on_b), "q{state} on b");
        }
    }

    #[test]
    fn test_total_function() {
        let dfa = automaton("GATTACA", "ACGT");
        for state in dfa.states() {
            for symbol in dfa.alphabet().iter() {
                let target = dfa.next_state(state, symbol).unwrap();
                assert!(target <= dfa.accepting_state());
            }
        }
        assert_eq!(dfa.num_transitions(), 8 * 4);
    }

    #[test]
    fn test_states() {
        let dfa = automaton("abc", "abcd");
        assert_eq!(dfa.initial_state(), 0);
        assert_eq!(dfa.accepting_state(), 3);
        assert_eq!(dfa.accepting_states(), vec![3]);
        assert!(dfa.is_accepting(3));
        assert!(!dfa.is_accepting(0));
        assert_eq!(dfa.states().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_undefined_lookups() {
        let dfa = automaton("ab", "ab");
        assert_eq!(dfa.next_state(0, &'z'), None);
        assert_eq!(dfa.next_state(3, &'a'), None);
    }

    #[test]
    fn test_pattern_symbol_outside_alphabet() {
        // 'x' cannot be read, so q2 is never reached but the table stays total
        let dfa = automaton("axb", "ab");
        assert_eq!(dfa.next_state(1, &'a'), Some(1));
        assert_eq!(dfa.next_state(1, &'b'), Some(0));
        assert_eq!(dfa.num_transitions(), 4 * 2);
    }

    #[test]
    fn test_errors() {
        let alphabet = extract_alphabet("ab".chars());
        assert_eq!(build_automaton(&[], &alphabet), Err(SearchError::EmptyPattern));
        let empty = extract_alphabet("".chars());
        assert_eq!(build_automaton(&['a'], &empty), Err(SearchError::EmptyAlphabet));
    }

    #[test]
    fn test_transition_map_order() {
        let dfa = automaton("ab", "ab");
        let map = dfa.transition_map();
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(
            keys,
            vec![(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
        );
        assert_eq!(map[&(2, 'a')], 1);
        assert_eq!(map[&(1, 'a')], 1);
        assert_eq!(map[&(1, 'b')], 2);
        assert_eq!(map[&(2, 'b')], 0);
    }
}
