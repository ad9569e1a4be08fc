#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a well-formed
/// expression.
pub enum RuntimeError {
    /// Tried to use a polynomial name that is not bound.
    UnknownVariable {
        /// The name of the polynomial.
        name: String,
    },
    /// Attempted to divide by the zero polynomial.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Polynomial '{name}' not found."),
            Self::DivisionByZero => write!(f, "Division by the zero polynomial."),
        }
    }
}

impl std::error::Error for RuntimeError {}
