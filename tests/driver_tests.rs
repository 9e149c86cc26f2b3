use std::path::{Path, PathBuf};

use lox_scan::driver::{self, EXIT_DATA_ERR, Format};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn run(name: &str, format: Format, fancy: bool) -> (u8, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = driver::run_file(&fixture(name), format, fancy, &mut out, &mut err)
        .expect("fixture should be readable");
    (
        status,
        String::from_utf8(out).expect("stdout is UTF-8"),
        String::from_utf8(err).expect("stderr is UTF-8"),
    )
}

#[test]
fn clean_file_exits_zero_and_lists_eof() {
    let (status, out, err) = run("tokens.lox", Format::Text, false);
    assert_eq!(status, 0);
    assert!(err.is_empty());
    let expected = include_str!("../fixtures/tokens.expected");
    assert_eq!(out, expected);
    assert_eq!(out.lines().last(), Some("EOF  nil"));
}

#[test]
fn lexical_errors_exit_with_data_error() {
    let (status, out, err) = run("errors.lox", Format::Text, false);
    assert_eq!(status, EXIT_DATA_ERR);
    assert_eq!(status, 65);

    // Tokens that scanned cleanly are still printed, EOF included
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["PRINT print nil", "; ; nil", "EOF  nil"]);

    let errors: Vec<&str> = err.lines().collect();
    assert_eq!(
        errors,
        vec![
            "[line 1] Error: Unexpected character '@'",
            "[line 2] Error: Unterminated string",
        ]
    );
}

#[test]
fn fancy_errors_name_the_file() {
    let (status, _, err) = run("errors.lox", Format::Text, true);
    assert_eq!(status, EXIT_DATA_ERR);
    assert!(err.contains("Unexpected character '@'"), "{err}");
    assert!(err.contains("errors.lox"), "{err}");
}

#[test]
fn json_output_is_a_token_array() {
    let (status, out, _) = run("tokens.lox", Format::Json, false);
    assert_eq!(status, 0);
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    let tokens = json.as_array().expect("array of tokens");
    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[0]["kind"], "VAR");
    assert_eq!(tokens[10]["kind"], "EOF");
}

#[test]
fn missing_file_is_an_error() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = driver::run_file(
        &fixture("does-not-exist.lox"),
        Format::Text,
        false,
        &mut out,
        &mut err,
    );
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("read source file"), "{message}");
    assert!(out.is_empty());
}
