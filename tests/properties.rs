mod common;

use common::write_temp;
use tplfill::{load_properties, parse_properties, Error};

#[test]
fn test_load_valid() {
    let file = write_temp("# comment\nFOO=bar\nBAZ = qux\n\n");
    let props = load_properties(file.path()).unwrap();

    assert_eq!(props.len(), 2);
    assert_eq!(props["FOO"], b"bar");
    assert_eq!(props["BAZ"], b"qux");
}

#[test]
fn test_invalid_line() {
    let file = write_temp("INVALID_LINE\n");
    match load_properties(file.path()) {
        Err(Error::Parse { line, text }) => {
            assert_eq!(line, 1);
            assert_eq!(text, "INVALID_LINE");
        }
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_line_rejects_everything() {
    let result = parse_properties("A=1\nB=2\n  broken  \nC=3");
    match result {
        Err(Error::Parse { line, text }) => {
            assert_eq!(line, 3);
            assert_eq!(text, "  broken  ");
        }
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_split_on_first_equals() {
    let props = parse_properties("URL = http://x?a=b&c=d").unwrap();
    assert_eq!(props["URL"], b"http://x?a=b&c=d");
}

#[test]
fn test_indented_comment_and_blank_lines() {
    let props = parse_properties("   # indented comment\n \t \nKEY=value").unwrap();
    assert_eq!(props.len(), 1);
    assert_eq!(props["KEY"], b"value");
}

#[test]
fn test_empty_value_and_crlf() {
    let props = parse_properties("EMPTY=\r\nNAME = x \r\n").unwrap();
    assert_eq!(props["EMPTY"], b"");
    assert_eq!(props["NAME"], b"x");
}

#[test]
fn test_duplicate_key_last_wins() {
    let props = parse_properties("K=first\nK=second").unwrap();
    assert_eq!(props["K"], b"second");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_properties(dir.path().join("absent.properties"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_error_messages() {
    let err = parse_properties("oops").unwrap_err();
    assert_eq!(err.to_string(), "invalid property line 1: oops");
}

#[test]
fn test_values_keep_raw_bytes() {
    let props = parse_properties(b"CITY = Z\xfcrich\n").unwrap();
    assert_eq!(props["CITY"], b"Z\xfcrich");
}
