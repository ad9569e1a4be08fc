/// Parsing errors.
///
/// Defines the errors raised when an expression or a command line does not
/// match any recognised form, or when a token that must be a number is not
/// one.
pub mod parse_error;
/// Persistence errors.
///
/// Contains the errors raised while saving or loading a polynomial table:
/// file access failures, malformed contents and unsupported format versions.
pub mod persist_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a well-formed expression, such
/// as unknown polynomial names or division by the zero polynomial.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use persist_error::PersistError;
pub use runtime_error::RuntimeError;

/// Any error a command can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// See [`ParseError`].
    Parse(ParseError),
    /// See [`RuntimeError`].
    Runtime(RuntimeError),
    /// See [`PersistError`].
    Persist(PersistError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
            Self::Persist(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Persist(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl From<PersistError> for Error {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// A command in a script failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// The 1-based line of the failing command.
    pub line:  usize,
    /// The underlying failure.
    pub error: Error,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
