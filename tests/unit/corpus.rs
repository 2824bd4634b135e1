//! Corpus reader behavior on in-memory and on-disk input.

use crate::common::{write_corpus, TINY_CORPUS};
use lexis::{open_corpus, parse_corpus, CorpusError, CorpusReader, Record};
use std::io::Cursor;

#[test]
fn test_tiny_corpus_has_four_records() {
    let records = parse_corpus(TINY_CORPUS);
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "www.shoppinglist.com",
            "www.rainbow.org",
            "www.dr.seuss.net",
            "www.bigbadwolf.com",
        ]
    );
}

#[test]
fn test_bodies_are_passed_through_verbatim() {
    let records = parse_corpus("a.com\n  Mixed CASE, punct!  \n");
    assert_eq!(records, vec![Record::new("a.com", "  Mixed CASE, punct!  ")]);
}

#[test]
fn test_truncated_record_is_dropped() {
    let mut reader = CorpusReader::new(Cursor::new("a.com\nfish\nb.com"));
    assert_eq!(reader.next(), Some(Record::new("a.com", "fish")));
    assert_eq!(reader.next(), None);
    assert_eq!(reader.next(), None);
    assert_eq!(reader.lines_read(), 3);
    assert!(reader.take_error().is_none());
}

#[test]
fn test_open_corpus_reads_file() {
    let file = write_corpus("x.org\nred fish\ny.org\nblue fish\n");
    let records: Vec<Record> = open_corpus(file.path()).unwrap().collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], Record::new("y.org", "blue fish"));
}

#[test]
fn test_open_corpus_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    match open_corpus(&missing) {
        Err(CorpusError::Open { path, .. }) => assert_eq!(path, missing),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("opening a missing file should fail"),
    }
}

#[test]
fn test_open_error_message_names_path() {
    let err = open_corpus("no/such/corpus.txt").err().unwrap();
    assert!(err.to_string().contains("no/such/corpus.txt"), "{err}");
}
