//! Process-level tests of the complete observable contract.
//!
//! These tests execute the compiled `bcalc` binary and verify stdout, stderr,
//! and the exit code for every documented invocation shape.

use std::process::{Command, Output};

/// Run the bcalc binary with the given arguments.
fn run_bcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bcalc"))
        .args(args)
        .output()
        .expect("failed to execute bcalc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is not UTF-8")
}

const USAGE_LINE: &str = "Invalid call. Usage: bcalc (number) [+,-,*,/] (number)\n";

#[test]
fn wrong_argument_count_prints_usage_and_exits_1() {
    for args in [
        &[][..],
        &["3"][..],
        &["3", "+"][..],
        &["3", "+", "4", "5"][..],
        // `--` is clap's trailing-args escape; it still counts as a token.
        &["--", "3", "+", "4"][..],
        &["3", "+", "4", "--"][..],
    ] {
        let output = run_bcalc(args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert_eq!(stdout(&output), USAGE_LINE, "args: {args:?}");
    }
}

#[test]
fn help_flag_is_just_a_wrong_argument_count() {
    let output = run_bcalc(&["--help"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), USAGE_LINE);
}

#[test]
fn addition() {
    let output = run_bcalc(&["3", "+", "4"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "7.000000\n");
}

#[test]
fn subtraction_with_bare_hyphen_operator() {
    let output = run_bcalc(&["10", "-", "4"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "6.000000\n");
}

#[test]
fn multiplication() {
    let output = run_bcalc(&["6", "*", "7"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "42.000000\n");
}

#[test]
fn division_truncates() {
    let output = run_bcalc(&["7", "/", "2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "3.000000\n");
}

#[test]
fn negative_operands_are_accepted() {
    let output = run_bcalc(&["-5", "+", "3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "-2.000000\n");
}

#[test]
fn non_numeric_operand_coerces_to_zero() {
    let output = run_bcalc(&["abc", "+", "2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "2.000000\n");
}

#[test]
fn unrecognized_operator_is_a_silent_noop() {
    let output = run_bcalc(&["3", "%", "2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "");
}

#[test]
fn division_by_zero_is_a_reported_error() {
    let output = run_bcalc(&["5", "/", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("division by zero"));
}
