use crate::util::num::MAX_EXPONENT;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading an expression or a
/// command line.
pub enum ParseError {
    /// The expression matched none of the expression forms.
    InvalidExpression {
        /// The normalized expression that could not be evaluated.
        expression: String,
    },
    /// A token that had to be a number could not be read as one.
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// The right-hand side of `^` was not an integer from 0 to
    /// `MAX_EXPONENT`.
    InvalidExponent {
        /// The offending token.
        token: String,
    },
    /// A variable name was empty or contained whitespace.
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// A known command was called with the wrong shape.
    Usage {
        /// The expected form of the command.
        usage: &'static str,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { expression } => {
                write!(f, "Invalid polynomial expression: '{expression}'.")
            },
            Self::InvalidNumber { token } => write!(f, "'{token}' is not a valid number."),
            Self::InvalidExponent { token } => write!(f,
                                                      "Exponent '{token}' must be an integer from 0 to {MAX_EXPONENT}."),
            Self::InvalidName { name } => write!(f,
                                                 "'{name}' is not a valid polynomial name. Names must be non-empty and contain no whitespace."),
            Self::Usage { usage } => write!(f, "Usage: {usage}"),
        }
    }
}

impl std::error::Error for ParseError {}
