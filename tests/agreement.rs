#[allow(dead_code)]
mod common;

use common::{DNA, chars, random_pattern, random_sequence};
use seqmatch::prelude::*;
use seqmatch::search_with_automaton;

fn occurrences_by_hand(sequence: &[u8], pattern: &[u8]) -> Vec<usize> {
    sequence
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn all_matchers_agree_on_random_dna() {
    for _ in 0..300 {
        let sequence = random_sequence(DNA, 200);
        let pattern = random_pattern(DNA, 6);

        let expected = occurrences_by_hand(&sequence, &pattern);
        let naive = search_naive(&sequence, &pattern).unwrap();
        let kmp = search_kmp(&sequence, &pattern).unwrap();
        let automaton = search_automaton(&sequence, &pattern).unwrap();

        assert_eq!(naive.occurrences, expected, "pattern {pattern:?}");
        assert_eq!(kmp.occurrences, expected, "pattern {pattern:?}");
        assert_eq!(automaton.occurrences, expected, "pattern {pattern:?}");
    }
}

#[test]
fn matchers_agree_on_small_alphabet() {
    // a binary alphabet produces many overlapping matches and long fallback chains
    for _ in 0..300 {
        let sequence = random_sequence(b"ab", 64);
        let pattern = random_pattern(b"ab", 5);
        let naive = search_naive(&sequence, &pattern).unwrap();
        assert_eq!(search_kmp(&sequence, &pattern).unwrap().occurrences, naive.occurrences);
        assert_eq!(search_automaton(&sequence, &pattern).unwrap().occurrences, naive.occurrences);
    }
}

#[test]
fn automaton_counts_one_comparison_per_symbol() {
    for _ in 0..100 {
        let sequence = random_sequence(DNA, 150);
        let pattern = random_pattern(DNA, 4);
        let result = search_automaton(&sequence, &pattern).unwrap();
        assert!(result.is_complete());
        assert_eq!(result.comparisons, sequence.len());
    }
}

#[test]
fn kmp_comparisons_are_linear() {
    for _ in 0..100 {
        let sequence = random_sequence(b"ab", 300);
        let pattern = random_pattern(b"ab", 8);
        let result = search_kmp(&sequence, &pattern).unwrap();
        assert!(result.comparisons <= 2 * sequence.len());
        assert!(result.comparisons >= sequence.len());
    }
}

#[test]
fn naive_comparisons_are_bounded() {
    for _ in 0..100 {
        let sequence = random_sequence(DNA, 100);
        let pattern = random_pattern(DNA, 5);
        let result = search_naive(&sequence, &pattern).unwrap();
        let offsets = sequence.len() - pattern.len() + 1;
        assert!(result.comparisons >= offsets);
        assert!(result.comparisons <= offsets * pattern.len());
    }
}

#[test]
fn truncation_keeps_partial_results() {
    let alphabet = extract_alphabet(DNA.iter().copied());
    let automaton = build_automaton(b"GA", &alphabet).unwrap();
    let result = search_with_automaton(b"GAGA\nGA", &automaton);
    assert_eq!(result.occurrences, vec![0, 2]);
    assert_eq!(result.comparisons, 4);
    assert!(!result.is_complete());

    // truncated on the very last symbol: one less than the sequence length
    let sequence = b"TTGAN";
    let result = search_with_automaton(sequence, &automaton);
    assert_eq!(result.occurrences, vec![2]);
    assert_eq!(result.comparisons, sequence.len() - 1);
}

#[test]
fn unicode_sequences() {
    let sequence = chars("αβγαβγαβ");
    let pattern = chars("γαβ");
    for algorithm in Algorithm::ALL {
        let result = algorithm.search(&sequence, &pattern).unwrap();
        assert_eq!(result.occurrences, vec![2, 5], "{algorithm}");
    }
}

#[test]
fn repeated_calls_are_identical() {
    let sequence = random_sequence(DNA, 120);
    let pattern = random_pattern(DNA, 3);
    for algorithm in Algorithm::ALL {
        let first = algorithm.search(&sequence, &pattern).unwrap();
        let second = algorithm.search(&sequence, &pattern).unwrap();
        assert_eq!(first, second, "{algorithm}");
    }
}

#[test]
fn engines_are_reusable_across_sequences() {
    let engine = SearchEngineBuilder::new(b"ACA")
        .algorithm(Algorithm::Automaton)
        .alphabet(extract_alphabet(DNA.iter().copied()))
        .build()
        .unwrap();
    assert_eq!(engine.search(b"ACACA").occurrences, vec![0, 2]);
    assert_eq!(engine.search(b"TTTT").occurrences, Vec::<usize>::new());
    assert_eq!(engine.search(b"ACACA").occurrences, vec![0, 2]);
}
