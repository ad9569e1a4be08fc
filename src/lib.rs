//! # polycalc
//!
//! polycalc is an interactive calculator for univariate polynomials with real
//! coefficients, written in Rust. It evaluates expressions over named
//! polynomials (sums, products, long division, powers, derivatives and
//! greatest common divisors) and saves its variable table to JSON files.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::ScriptError, interpreter::session::Session};

/// Provides unified error types for parsing, evaluation and persistence.
///
/// This module defines every error a command can raise. Errors carry enough
/// detail (the offending token, name or file) to be printed to the user as
/// they are.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parse, runtime, persist).
/// - Unifies them in a single `Error` type for command execution.
/// - Attaches line numbers to failures inside scripts.
pub mod error;
/// Expression evaluation and the command session.
///
/// This module ties together whitespace normalization, expression
/// evaluation, command recognition and the binding table. It exposes the
/// entry points used by the command-line front end.
///
/// # Responsibilities
/// - Evaluates expression strings against named polynomials.
/// - Recognises and executes commands.
/// - Runs scripts and reports the failing line.
pub mod interpreter;
/// The polynomial arithmetic engine.
///
/// This module declares the `Polynomial` type, which keeps its coefficients
/// in canonical form, and implements every operation on it: arithmetic,
/// long division, greatest common divisor, derivative and evaluation.
///
/// # Responsibilities
/// - Keeps coefficient sequences free of leading zeros.
/// - Implements the arithmetic operators and long division.
/// - Formats polynomials for display.
pub mod polynomial;
/// Saving and loading polynomial tables.
///
/// Tables are stored as versioned JSON documents, one record per polynomial
/// with its name and coefficients.
pub mod storage;
/// Helpers for reading numeric tokens.
pub mod util;

/// Runs a script on a fresh session and returns its output lines.
///
/// Each line of `source` is one command, exactly as it would be typed at the
/// interactive prompt. Execution stops at `exit` or at the first failure.
///
/// # Errors
/// Returns an error naming the first line that failed.
///
/// # Examples
/// ```
/// use polycalc::run_script;
///
/// let output = run_script("p = 1 1\nq = p ^ 2\nvalue q 3").unwrap();
/// assert_eq!(output, vec!["p = (1x)+(1)", "q = (1x^2)+(2x)+(1)", "16"]);
///
/// // `r` is not defined.
/// let err = run_script("p = 1 1\nq = p + r").unwrap_err();
/// assert_eq!(err.line, 2);
/// ```
pub fn run_script(source: &str) -> Result<Vec<String>, ScriptError> {
    Session::new().run_script(source)
}
