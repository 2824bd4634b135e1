//! Drive the interactive shell over the checked-in corpus.

use crate::common::{tiny_corpus_path, write_corpus};
use lexis::shell::{FAREWELL, INVALID_CORPUS, PROMPT, STAND_BY};
use lexis::{build_index_from_path, print_banner, Shell};

/// Build from `path`, print the banner, then feed `input` to the shell.
fn session(path: &std::path::Path, input: &str) -> (usize, String) {
    let outcome = build_index_from_path(path);
    let mut out = Vec::new();
    print_banner(&outcome, &mut out).unwrap();
    let answered = Shell::new(&outcome.index)
        .run(input.as_bytes(), &mut out)
        .unwrap();
    (answered, String::from_utf8(out).unwrap())
}

#[test]
fn test_full_session_transcript() {
    let (answered, out) = session(&tiny_corpus_path(), "fish\nfish +red\nfish -red\n\n");

    let expected = format!(
        "{stand}\n\
         Indexed 4 pages containing 20 unique terms\n\
         \n\
         {p}Found 2 matching pages\n\
         www.dr.seuss.net\n\
         www.shoppinglist.com\n\
         \n\
         {p}Found 1 matching pages\n\
         www.dr.seuss.net\n\
         \n\
         {p}Found 1 matching pages\n\
         www.shoppinglist.com\n\
         \n\
         {p}{bye}\n",
        stand = STAND_BY,
        p = PROMPT,
        bye = FAREWELL,
    );

    assert_eq!(answered, 3);
    assert_eq!(out, expected);
}

#[test]
fn test_session_ends_at_eof() {
    let (answered, out) = session(&tiny_corpus_path(), "blue");
    assert_eq!(answered, 1);
    assert!(out.contains("Found 2 matching pages\nwww.dr.seuss.net\nwww.rainbow.org\n"));
    assert!(out.ends_with(&format!("{}{}\n", PROMPT, FAREWELL)));
}

#[test]
fn test_unknown_term_reports_zero() {
    let (_, out) = session(&tiny_corpus_path(), "dragon\n\n");
    assert!(out.contains("Found 0 matching pages\n\n"));
}

#[test]
fn test_missing_corpus_still_runs_shell() {
    let (answered, out) = session(std::path::Path::new("invalid_file.txt"), "fish\n\n");

    assert!(out.starts_with(&format!("{}\n{}\n", INVALID_CORPUS, STAND_BY)));
    assert!(out.contains("Indexed 0 pages containing 0 unique terms"));
    assert!(out.contains("Found 0 matching pages"));
    assert_eq!(answered, 1);
}

#[test]
fn test_crlf_input_lines() {
    let file = write_corpus("a.com\r\nred fish\r\nb.com\r\nblue fish\r\n");
    let (answered, out) = session(file.path(), "fish -blue\r\n\r\n");

    assert_eq!(answered, 1);
    assert!(out.contains("Indexed 2 pages containing 3 unique terms"));
    assert!(out.contains("Found 1 matching pages\na.com\n"));
}
