use std::io::Write as _;

use seqmatch::prelude::*;

#[test]
fn reads_file_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"ACGT\r\nTTGA\n").unwrap();

    let raw = read_source(&Source::File(file.path().to_path_buf())).unwrap();
    assert_eq!(raw, b"ACGT\r\nTTGA\n");
    assert_eq!(normalize_bytes(&raw), b"ACGTTTGA");
    assert_eq!(normalize_text(std::str::from_utf8(&raw).unwrap()), "ACGTTTGA");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_source(&Source::File(dir.path().join("absent.txt"))).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn text_source_is_verbatim() {
    let raw = read_source(&Source::Text(String::from(" GA\nTA "))).unwrap();
    assert_eq!(raw, b" GA\nTA ");
}

#[test]
fn file_session_matches_text_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"GATTA\nCATTA\n").unwrap();

    let from_file = SeqMatchOptionsBuilder::default()
        .pattern("TTA")
        .file(file.path().to_string_lossy().into_owned())
        .build()
        .unwrap();
    let from_text = SeqMatchOptionsBuilder::default()
        .pattern("TTA")
        .text("GATTACATTA")
        .build()
        .unwrap();

    let a = SeqMatch::run_with(&from_file).unwrap();
    let b = SeqMatch::run_with(&from_text).unwrap();
    assert_eq!(a.reports, b.reports);
    assert!(a.found());
}
