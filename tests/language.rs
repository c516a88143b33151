use std::fs::{self};

use stackcalc::{error::ErrorKind, evaluate};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, expression, expected) in extract_cases(&content) {
            count += 1;
            let result = evaluate(&expression);
            match (&expected, &result) {
                (Expected::Value(v), Ok(got)) if (v - got).abs() < TOLERANCE => {},
                (Expected::Error(kind), Err(e)) if e.kind() == *kind => {},
                _ => panic!("Case on line {line_number} of {path:?} failed:\n{expression}\nExpected: {expected:?}\nGot: {result:?}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[derive(Debug)]
enum Expected {
    Value(f64),
    Error(ErrorKind),
}

/// Reads `expression => value` and `expression => !ErrorKind` lines.
/// Blank lines and lines starting with `#` are ignored.
fn extract_cases(content: &str) -> Vec<(usize, String, Expected)> {
    let mut cases = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (expression, expected) =
            line.rsplit_once("=>")
                .unwrap_or_else(|| panic!("Line {} has no '=>': {line}", i + 1));
        let expected = expected.trim();
        let expected = match expected.strip_prefix('!') {
            Some(kind) => Expected::Error(parse_kind(kind)),
            None => Expected::Value(expected.parse()
                                            .unwrap_or_else(|_| panic!("Bad value on line {}: {expected}", i + 1))),
        };
        cases.push((i + 1, expression.trim().to_string(), expected));
    }

    cases
}

fn parse_kind(name: &str) -> ErrorKind {
    match name {
        "InvalidCharacter" => ErrorKind::InvalidCharacter,
        "MalformedNumber" => ErrorKind::MalformedNumber,
        "MismatchedParentheses" => ErrorKind::MismatchedParentheses,
        "InsufficientOperands" => ErrorKind::InsufficientOperands,
        "DivisionByZero" => ErrorKind::DivisionByZero,
        "TrailingGarbage" => ErrorKind::TrailingGarbage,
        other => panic!("Unknown error kind: {other}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(v) => assert!((v - expected).abs() < TOLERANCE,
                         "{src:?} evaluated to {v}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(v) => panic!("{src:?} evaluated to {v} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?} failed with {e}"),
    }
}

#[test]
fn precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3+4", 10.0);
    assert_value("8-6/2", 5.0);
}

#[test]
fn left_associativity() {
    assert_value("10-2-3", 5.0);
    assert_value("100/10/5", 2.0);
    assert_value("2*6/3", 4.0);
    assert_value("1-2+3", 2.0);
}

#[test]
fn nested_parentheses() {
    assert_value("((1+2)*(3+4))", 21.0);
    assert_value("2*(3+(4-1)*2)", 18.0);
    assert_value("(((7)))", 7.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5+2.5", 4.0);
    assert_value(".5*4", 2.0);
    assert_value("3.*2", 6.0);
    assert_value("0.1+0.2", 0.3);
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(evaluate("2 + 3").unwrap(), evaluate("2+3").unwrap());
    assert_value("  \t( 1 +\t2 ) * 3  ", 9.0);
    assert_value("\u{b}1+2", 3.0);
    assert_value("1\r\n*\x0C4", 4.0);
}

#[test]
fn every_short_expression_returns_value_or_error() {
    const ALPHABET: [char; 10] = ['1', '0', '.', '+', '-', '*', '/', '(', ')', ' '];
    const MAX_LEN: u32 = 6;

    let mut count = 0;
    for len in 0..=MAX_LEN {
        for mut n in 0..ALPHABET.len().pow(len) {
            let mut src = String::with_capacity(len as usize);
            for _ in 0..len {
                src.push(ALPHABET[n % ALPHABET.len()]);
                n /= ALPHABET.len();
            }
            if let Ok(v) = evaluate(&src) {
                assert!(!v.is_nan(), "{src:?} evaluated to NaN");
            }
            count += 1;
        }
    }

    assert_eq!(count, 1_111_111);
}

#[test]
fn repeated_evaluation_is_identical() {
    let first = evaluate("7 / 3 + 1.25 * (4 - 2)").unwrap();
    let second = evaluate("7 / 3 + 1.25 * (4 - 2)").unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    assert_failure("5/0", ErrorKind::DivisionByZero);
    assert_value("5/1", 5.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5/0", ErrorKind::DivisionByZero);
    assert_failure("1/(2-2)", ErrorKind::DivisionByZero);
    assert_failure("1/0.0", ErrorKind::DivisionByZero);
}

#[test]
fn invalid_character_is_error() {
    assert_failure("2+a", ErrorKind::InvalidCharacter);
    assert_failure("2^3", ErrorKind::InvalidCharacter);
    assert_failure("1,5", ErrorKind::InvalidCharacter);
}

#[test]
fn invalid_character_wins_over_later_errors() {
    assert_failure("(1/0 + x", ErrorKind::InvalidCharacter);
}

#[test]
fn malformed_numbers_are_errors() {
    assert_failure("1.2.3", ErrorKind::MalformedNumber);
    assert_failure(".", ErrorKind::MalformedNumber);
    assert_failure("2 + ..", ErrorKind::MalformedNumber);
}

#[test]
fn missing_operands_are_errors() {
    assert_failure("+", ErrorKind::InsufficientOperands);
    assert_failure("", ErrorKind::InsufficientOperands);
    assert_failure("   ", ErrorKind::InsufficientOperands);
    assert_failure("()", ErrorKind::InsufficientOperands);
    assert_failure("2+", ErrorKind::InsufficientOperands);
    assert_failure("2**3", ErrorKind::InsufficientOperands);
    assert_failure("-5", ErrorKind::InsufficientOperands);
}

#[test]
fn mismatched_parentheses_are_errors() {
    assert_failure("(2+3", ErrorKind::MismatchedParentheses);
    assert_failure("2+3)", ErrorKind::MismatchedParentheses);
    assert_failure(")(", ErrorKind::MismatchedParentheses);
}

#[test]
fn juxtaposed_values_are_errors() {
    assert_failure("2 3", ErrorKind::TrailingGarbage);
    assert_failure("(1)(2)", ErrorKind::TrailingGarbage);
}

#[test]
fn error_messages_name_the_location() {
    let message = evaluate("12 / 0").unwrap_err().to_string();
    assert_eq!(message, "Division by zero at offset 3.");

    let message = evaluate("1 + $").unwrap_err().to_string();
    assert_eq!(message, "Invalid character '$' at offset 4.");
}
