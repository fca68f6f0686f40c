use rand::RngExt as _;

pub const DNA: &[u8] = b"ACGT";

/// Random sequence of `len` symbols drawn from `alphabet`
pub fn random_sequence(alphabet: &[u8], len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Random non-empty pattern of at most `max_len` symbols
pub fn random_pattern(alphabet: &[u8], max_len: usize) -> Vec<u8> {
    let len = rand::rng().random_range(1..=max_len);
    random_sequence(alphabet, len)
}

pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
