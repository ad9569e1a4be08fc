use std::fs::{self};

use polycalc::{
    error::{Error, ParseError, RuntimeError},
    run_script,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_script_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_script(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No polycalc examples found in book/src");
}

fn extract_script_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```polycalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs `src` and returns the last printed line.
fn last_line(src: &str) -> String {
    match run_script(src) {
        Ok(lines) => lines.last().cloned().unwrap_or_default(),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_prints(src: &str, expected: &str) {
    assert_eq!(last_line(src), expected, "script:\n{src}");
}

fn assert_failure(src: &str) -> Error {
    match run_script(src) {
        Ok(lines) => panic!("Script succeeded but was expected to fail: {lines:?}"),
        Err(e) => e.error,
    }
}

#[test]
fn assignment_and_display() {
    assert_prints("p1 = 1 2 0 1", "p1 = (1x^3)+(2x^2)+(1)");
    assert_prints("p = 0 0 1 2 3", "p = (1x^2)+(2x)+(3)");
    assert_prints("p = 0 0", "p = (0)");
    assert_prints("p = 1.5 -2", "p = (1.5x)+(-2)");
    assert_prints("a = 1 1\nb = a\nb", "(1x)+(1)");
}

#[test]
fn basic_arithmetic() {
    assert_prints("a = 1 2 3\nb = 1 1\na + b", "(1x^2)+(3x)+(4)");
    assert_prints("a = 1 2 3\nb = 1 1\na - b", "(1x^2)+(1x)+(2)");
    assert_prints("a = 1 1\nb = 1 -1\na * b", "(1x^2)+(-1)");
    assert_prints("a = 1 2 3\na * 2", "(2x^2)+(4x)+(6)");
    assert_prints("a = 1 1\na ^ 2", "(1x^2)+(2x)+(1)");
    assert_prints("a = 1 1\na ^ 0", "(1)");
}

#[test]
fn division_and_remainder() {
    assert_prints("a = 1 2 5\nb = 1 1\na / b", "(1x)+(1)");
    assert_prints("a = 1 2 5\nb = 1 1\na % b", "(4)");
    assert_prints("a = 1 1\nb = 1 0 0\na / b", "(0)");
    assert_prints("a = 1 1\nb = 1 0 0\na % b", "(1x)+(1)");
}

#[test]
fn derivative_and_gcd() {
    assert_prints("p = 1 2 3\nd = der(p)", "d = (2x)+(2)");
    assert_prints("p = 5\nder(p)", "(0)");
    assert_prints("f = 2 0 -2\ng = 1 -1 0\ngcd(f,g)", "(2x)+(-2)");
    assert_prints("f = 1 0 -1\ng = 1 -1\ngcd(f, g)", "(1x)+(-1)");
}

#[test]
fn operators_split_at_the_first_match_in_fixed_order() {
    assert_prints("x = 2+3*4", "x = (14)");
    assert_prints("x = 2*3+4", "x = (10)");
    assert_prints("x = 5-2-1", "x = (4)");
    assert_prints("x = 8/2/2", "x = (8)");
}

#[test]
fn whitespace_is_not_significant_around_operators() {
    assert_prints("a = 1 1\nb = 1 2\na+b", "(2x)+(3)");
    assert_prints("a = 1 1\nb = 1 2\n  a   +    b  ", "(2x)+(3)");
    assert_prints("a = 1 1\nder( a )", "(1)");
}

#[test]
fn value_command() {
    assert_prints("p = 1 2 1\nvalue p 2", "9");
    assert_prints("p = 1 0 0\nvalue p -1.5", "2.25");
    assert_prints("p = 0\nvalue p 7", "0");
}

#[test]
fn failures_name_their_cause() {
    assert!(matches!(assert_failure("p = q"),
                     Error::Runtime(RuntimeError::UnknownVariable { .. })));
    assert!(matches!(assert_failure("a = 1\nb = 0\na / b"),
                     Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(assert_failure("a = 1\nb = 0\na % b"),
                     Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(assert_failure("a = 1 1\na ^ -1"),
                     Error::Parse(ParseError::InvalidExponent { .. })));
    assert!(matches!(assert_failure("a = 1 1\na ^ 1.5"),
                     Error::Parse(ParseError::InvalidExponent { .. })));
    assert!(matches!(assert_failure("a = 1 1\nb = a ^ 200000"),
                     Error::Parse(ParseError::InvalidExponent { .. })));
    assert!(matches!(assert_failure("value p"), Error::Parse(ParseError::Usage { .. })));
    assert!(matches!(assert_failure("p = 1 x 2"),
                     Error::Parse(ParseError::InvalidExpression { .. })));
    assert!(matches!(assert_failure("a = 1\na * -2"),
                     Error::Parse(ParseError::InvalidExpression { .. })));
}

#[test]
fn failing_line_is_reported() {
    let err = run_script("a = 1 1\n\n# comment\nb = a / c").unwrap_err();
    assert_eq!(err.line, 4);
    assert_eq!(err.to_string(), "Error on line 4: Polynomial 'c' not found.");
}

#[test]
fn exit_stops_the_script() {
    assert_eq!(run_script("p = 1\nexit\nthis would fail").unwrap(), vec!["p = (1)"]);
}

#[test]
fn long_sums_leave_the_session_usable() {
    let script = format!("s = {}\nlist", vec!["1"; 300_000].join("+"));
    assert_eq!(run_script(&script).unwrap(), vec!["s = (300000)", "s = (300000)"]);
}
