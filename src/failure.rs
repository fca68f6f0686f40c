//! Failure functions (borders) of a pattern.
//!
//! Two flavours are provided:
//! - [`build_failure_table`] is the classic KMP prefix function, computed in O(m) for the
//!   whole pattern at once. The backtracking matcher falls back through it on mismatches.
//! - [`longest_border`] answers the question for one arbitrary string. The automaton builder
//!   queries it on synthetic strings (a matched prefix followed by any alphabet symbol), which
//!   never appear as prefixes of the pattern itself.
//!
//! Both agree wherever they overlap: `longest_border(&p[..=i]) == build_failure_table(p)[i]`.

/// Computes the longest-proper-prefix-which-is-also-suffix table of `pattern`.
///
/// `table[i]` is the length of the longest proper border of `pattern[..=i]`. In particular
/// `table[0] == 0` and `table[i] <= i`. An empty pattern yields an empty table.
///
/// ```
/// use seqmatch::build_failure_table;
///
/// assert_eq!(build_failure_table(b"ababaca"), vec![0, 0, 1, 2, 3, 0, 1]);
/// assert_eq!(build_failure_table(b"aaaa"), vec![0, 1, 2, 3]);
/// ```
pub fn build_failure_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
            i += 1;
        } else if len != 0 {
            // `len` only shrinks along the chain it previously grew, hence O(m) overall
            len = table[len - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }

    table
}

/// Length of the longest proper border of `s`: the longest string, strictly shorter than
/// `s`, that is both a prefix and a suffix of it.
///
/// Candidates are tried from the longest down, so this is O(n²) in the worst case. It is
/// meant for the short strings the automaton builder produces.
///
/// ```
/// use seqmatch::longest_border;
///
/// assert_eq!(longest_border(b"abab"), 2);
/// assert_eq!(longest_border(b"abc"), 0);
/// assert_eq!(longest_border(b"a"), 0);
/// ```
pub fn longest_border<T: PartialEq>(s: &[T]) -> usize {
    let n = s.len();
    (1..n).rev().find(|&k| s[..k] == s[n - k..]).unwrap_or(0)
}
