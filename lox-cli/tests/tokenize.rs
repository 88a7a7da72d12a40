//! End-to-end tests for `lox tokenize`.

use std::fs;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn tokenize(source: &[u8], extra: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.lox");
    fs::write(&path, source).unwrap();

    Command::new(env!("CARGO_BIN_EXE_lox"))
        .args(extra)
        .arg("tokenize")
        .arg(&path)
        .env_remove("LOX_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn parens_and_braces() {
    let out = tokenize(b"(()){}", &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "LEFT_PAREN ( null\nLEFT_PAREN ( null\nRIGHT_PAREN ) null\nRIGHT_PAREN ) null\n\
         LEFT_BRACE { null\nRIGHT_BRACE } null\nEOF  null\n"
    );
    assert_eq!(stderr(&out), "");
}

#[test]
fn empty_file() {
    let out = tokenize(b"", &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "EOF  null\n");
}

#[test]
fn comment_is_skipped() {
    let out = tokenize(b"// comment\n(", &[]);
    assert_eq!(stdout(&out), "LEFT_PAREN ( null\nEOF  null\n");
}

#[test]
fn literals() {
    let out = tokenize(b"var x = \"hi\" + 123.450 * 100;", &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "VAR var null\nIDENTIFIER x null\nEQUAL = null\nSTRING \"hi\" hi\nPLUS + null\n\
         NUMBER 123.450 123.45\nSTAR * null\nNUMBER 100 100.0\nSEMICOLON ; null\nEOF  null\n"
    );
}

#[test]
fn unexpected_character_exits_65_and_keeps_scanning() {
    let out = tokenize(b",@.", &[]);
    assert_eq!(out.status.code(), Some(65));
    assert_eq!(stderr(&out), "[line 1] Error: Unexpected character: @\n");
    assert_eq!(stdout(&out), "COMMA , null\nDOT . null\nEOF  null\n");
}

#[test]
fn unterminated_string_stops_output() {
    let out = tokenize(b"\"unterminated", &[]);
    assert_eq!(out.status.code(), Some(65));
    assert_eq!(stderr(&out), "[line 1] Error: Unterminated string.\n");
    assert_eq!(stdout(&out), "EOF  null\n");
}

#[test]
fn pretty_format_includes_error_code() {
    let out = tokenize(b"x = #;", &["--format", "pretty"]);
    assert_eq!(out.status.code(), Some(65));
    assert!(stderr(&out).contains("E0001"));
    assert!(stderr(&out).contains("Unexpected character: #"));
}

#[test]
fn missing_file_exits_1() {
    let out = Command::new(env!("CARGO_BIN_EXE_lox"))
        .args(["tokenize", "/no/such/file.lox"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("cannot read file '/no/such/file.lox'"));
    assert_eq!(stdout(&out), "");
}

#[test]
fn quiet_hides_cli_errors() {
    let out = Command::new(env!("CARGO_BIN_EXE_lox"))
        .args(["--quiet", "tokenize", "/no/such/file.lox"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stderr(&out), "");
}

#[test]
fn unknown_command_is_usage_error() {
    let out = Command::new(env!("CARGO_BIN_EXE_lox"))
        .arg("parse")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn verbose_explains_error_codes() {
    let out = tokenize(b"$", &["--verbose"]);
    assert_eq!(out.status.code(), Some(65));
    let err = stderr(&out);
    assert!(err.contains("[line 1] Error: Unexpected character: $"));
    assert!(err.contains("line 1: E0001 unexpected character in input"));
    assert_eq!(stdout(&out), "EOF  null\n");
}
