use pretty_assertions::assert_eq;

use super::{run_lines, run_text};
use crate::options::Mode;

fn text(input: &str, mode: Mode) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = run_text(input, mode, &mut out, &mut err).unwrap();
    (
        ok,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn lines(input: &str, mode: Mode) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = run_lines(input.as_bytes(), mode, &mut out, &mut err).unwrap();
    (
        ok,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

// === Single Input ===

#[test]
fn prints_one_arg_per_line() {
    let (ok, out, err) = text("give 'Old Steve' 64", Mode::Standard);
    assert!(ok);
    assert_eq!(out, "[give]\n[Old Steve]\n[64]\n");
    assert_eq!(err, "");
}

#[test]
fn empty_input_prints_nothing() {
    let (ok, out, _) = text("", Mode::Standard);
    assert!(ok);
    assert_eq!(out, "");
}

#[test]
fn lenient_empty_input_prints_blank_arg() {
    let (ok, out, _) = text("", Mode::Lenient);
    assert!(ok);
    assert_eq!(out, "[]\n");
}

#[test]
fn error_prints_caret() {
    let (ok, out, err) = text("oops\\", Mode::Standard);
    assert!(!ok);
    assert_eq!(out, "");
    assert_eq!(
        err,
        "error: buffer overrun while parsing arguments at position 4\noops\\\n    ^\n"
    );
}

// === Line Mode ===

#[test]
fn each_line_is_separate_input() {
    let (ok, out, _) = lines("a b\n'c d'\n", Mode::Standard);
    assert!(ok);
    assert_eq!(out, "[a]\n[b]\n\n[c d]\n");
}

#[test]
fn crlf_is_stripped() {
    let (_, out, _) = lines("a\r\nb\r\n", Mode::Standard);
    assert_eq!(out, "[a]\n\n[b]\n");
}

#[test]
fn failing_line_does_not_stop_processing() {
    let (ok, out, err) = lines("x\\\ny\n", Mode::Standard);
    assert!(!ok);
    assert_eq!(out, "\n[y]\n");
    assert!(err.starts_with("error: buffer overrun"));
}
