//! Reading sequences from their sources and normalizing them.
//!
//! Files and typed text usually carry line breaks that are not part of the sequence. They are
//! removed here, before anything reaches the matchers.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use memchr::memchr2_iter;

/// Where a sequence comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text given directly
    Text(String),
    /// Contents of a file
    File(PathBuf),
    /// Everything piped on standard input
    Stdin,
}

/// Reads the raw bytes of `source`
pub fn read_source(source: &Source) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match source {
        Source::Text(text) => buf.extend_from_slice(text.as_bytes()),
        Source::File(path) => {
            File::open(path)?.read_to_end(&mut buf)?;
        }
        Source::Stdin => {
            io::stdin().lock().read_to_end(&mut buf)?;
        }
    }
    debug!("read {} bytes from {:?}", buf.len(), source);
    Ok(buf)
}

/// Removes every line terminator (`\n`, `\r`) from `text`, then trims surrounding whitespace.
///
/// ```
/// use seqmatch::reader::normalize_text;
///
/// assert_eq!(normalize_text("  ACGT\nTTGA\r\nCC \n"), "ACGTTTGACC");
/// ```
pub fn normalize_text(text: &str) -> String {
    let joined: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    joined.trim().to_string()
}

/// Byte-level [`normalize_text`]: drops `\n` and `\r`, then trims ASCII whitespace.
pub fn normalize_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut joined = Vec::with_capacity(bytes.len());
    let mut start = 0;
    for end in memchr2_iter(b'\n', b'\r', bytes) {
        joined.extend_from_slice(&bytes[start..end]);
        start = end + 1;
    }
    joined.extend_from_slice(&bytes[start..]);
    joined.trim_ascii().to_vec()
}
