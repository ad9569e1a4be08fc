use std::path::PathBuf;

use crate::{error::ParseError, storage::with_default_extension};

/// Usage line of the `value` command.
pub const VALUE_USAGE: &str = "value <polynomial> <x>";
/// Usage line of the `save as` command.
pub const SAVE_USAGE: &str = "save as <filename>";
/// Usage line of the `load` command.
pub const LOAD_USAGE: &str = "load <filename>";

/// The command list printed by `help`.
pub const HELP: &str = "\
Available commands:
- help: Show this list
- exit: Close application
- list: Show current polynomials
- p1=<polynomial expression>: Create/assign polynomial
- value p1 x: Calculate polynomial value at x
- save as <filename.json>: Save polynomials to a JSON file
- load <filename.json>: Load polynomials from a JSON file
Polynomial expressions support:
  - Direct coefficients: p1 = 1 2 0 1
  - Copying: p1=p2
  - Operations:
     - Addition: p1+p2
     - Subtraction: p1-p2
     - Multiplication (with polynomial): p1*p2
     - Multiplication (with scalar): p1*k
     - Division (quotient): p1/p2
     - Division (remainder): p1%p2
     - Power: p1^n (n from 0 to 1024)
  - Derivative: der(p1)
  - Greatest Common Divisor: gcd(p1,p2)
Operators are applied in the order + - * / % ^, splitting at the first match.";

/// A single line of input, recognised but not yet executed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// A blank line.
    Empty,
    /// `help`
    Help,
    /// `exit`
    Exit,
    /// `list`
    List,
    /// `value <name> <x>`
    Value {
        /// The polynomial to evaluate.
        name: &'a str,
        /// The point to evaluate it at.
        x:    f64,
    },
    /// `save as <file>`
    Save {
        /// Target file, with the default extension applied.
        path: PathBuf,
    },
    /// `load <file>`
    Load {
        /// Source file, with the default extension applied.
        path: PathBuf,
    },
    /// `<name>=<expression>`
    Assign {
        /// The name to bind.
        name:       &'a str,
        /// The unevaluated right-hand side.
        expression: &'a str,
    },
    /// Any other line, evaluated and printed.
    Evaluate {
        /// The unevaluated expression.
        expression: &'a str,
    },
}

/// Recognises the command on one input line.
///
/// Keywords are checked before assignment, and assignment splits on the first
/// `=`. Anything unrecognised is treated as an expression.
///
/// # Errors
/// - `ParseError::Usage` for a keyword with the wrong arguments.
/// - `ParseError::InvalidNumber` for a bad `x` in `value`.
/// - `ParseError::InvalidName` for an empty or spaced assignment target.
///
/// # Example
/// ```
/// use polycalc::interpreter::command::{Command, parse_command};
///
/// assert_eq!(parse_command(" p = 1 2 ").unwrap(),
///            Command::Assign { name: "p", expression: "1 2" });
/// assert_eq!(parse_command("value p 2").unwrap(), Command::Value { name: "p", x: 2.0 });
/// assert_eq!(parse_command("p+q").unwrap(), Command::Evaluate { expression: "p+q" });
/// ```
pub fn parse_command(line: &str) -> Result<Command<'_>, ParseError> {
    let line = line.trim();

    match line {
        "" => return Ok(Command::Empty),
        "help" => return Ok(Command::Help),
        "exit" => return Ok(Command::Exit),
        "list" => return Ok(Command::List),
        _ => {},
    }

    if let Some(rest) = keyword_arguments(line, "value") {
        let parts = rest.split_whitespace().collect::<Vec<_>>();
        let [name, x] = parts[..] else {
            return Err(ParseError::Usage { usage: VALUE_USAGE });
        };
        let x = crate::util::num::parse_real(x)?;
        return Ok(Command::Value { name, x });
    }

    if let Some(rest) = keyword_arguments(line, "save") {
        let file = keyword_arguments(rest, "as").filter(|file| !file.is_empty())
                                                .ok_or(ParseError::Usage { usage: SAVE_USAGE })?;
        return Ok(Command::Save { path: with_default_extension(file.as_ref()) });
    }

    if let Some(rest) = keyword_arguments(line, "load") {
        if rest.is_empty() {
            return Err(ParseError::Usage { usage: LOAD_USAGE });
        }
        return Ok(Command::Load { path: with_default_extension(rest.as_ref()) });
    }

    if let Some((name, expression)) = line.split_once('=') {
        let name = name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(ParseError::InvalidName { name: name.to_string() });
        }
        return Ok(Command::Assign { name,
                                    expression: expression.trim() });
    }

    Ok(Command::Evaluate { expression: line })
}

/// Returns the trimmed text after `keyword` when the line starts with the
/// keyword followed by whitespace or nothing at all.
fn keyword_arguments<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn recognises_keywords() {
        assert_eq!(parse_command("  ").unwrap(), Command::Empty);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
        assert_eq!(parse_command(" list ").unwrap(), Command::List);
    }

    #[test]
    fn value_needs_a_name_and_a_number() {
        assert_eq!(parse_command("value  p   -1.5").unwrap(),
                   Command::Value { name: "p", x: -1.5 });
        assert_eq!(parse_command("value p"), Err(ParseError::Usage { usage: VALUE_USAGE }));
        assert_eq!(parse_command("value p 1 2"), Err(ParseError::Usage { usage: VALUE_USAGE }));
        assert_eq!(parse_command("value p x"),
                   Err(ParseError::InvalidNumber { token: "x".to_string() }));
    }

    #[test]
    fn save_and_load_apply_the_default_extension() {
        assert_eq!(parse_command("save as work").unwrap(),
                   Command::Save { path: Path::new("work.json").to_path_buf() });
        assert_eq!(parse_command("load dir/work.json").unwrap(),
                   Command::Load { path: Path::new("dir/work.json").to_path_buf() });
        assert_eq!(parse_command("save work"), Err(ParseError::Usage { usage: SAVE_USAGE }));
        assert_eq!(parse_command("save as"), Err(ParseError::Usage { usage: SAVE_USAGE }));
        assert_eq!(parse_command("load"), Err(ParseError::Usage { usage: LOAD_USAGE }));
    }

    #[test]
    fn assignment_splits_on_the_first_equals_sign() {
        assert_eq!(parse_command("p1=p2+p3").unwrap(),
                   Command::Assign { name:       "p1",
                                     expression: "p2+p3", });
        assert_eq!(parse_command("p = a = b").unwrap(),
                   Command::Assign { name:       "p",
                                     expression: "a = b", });
        assert_eq!(parse_command(" = 1"), Err(ParseError::InvalidName { name: String::new() }));
        assert_eq!(parse_command("my p = 1"),
                   Err(ParseError::InvalidName { name: "my p".to_string() }));
    }

    #[test]
    fn keywords_need_a_word_boundary() {
        assert_eq!(parse_command("values").unwrap(), Command::Evaluate { expression: "values" });
        assert_eq!(parse_command("loader=1").unwrap(),
                   Command::Assign { name:       "loader",
                                     expression: "1", });
    }
}
