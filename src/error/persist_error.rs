use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while saving or loading a polynomial
/// table.
pub enum PersistError {
    /// The file could not be read or written.
    Io {
        /// The file that was being accessed.
        path:    String,
        /// The message reported by the operating system.
        details: String,
    },
    /// The file was readable but its contents are not a polynomial table.
    Malformed {
        /// Details reported by the deserializer.
        details: String,
    },
    /// The file declares a format version this build does not understand.
    UnsupportedVersion {
        /// The version found in the file.
        found: u32,
    },
    /// A coefficient is infinite or NaN and cannot be written.
    NonFinite {
        /// The name of the offending polynomial.
        name: String,
    },
}

impl PersistError {
    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io { path:    path.display().to_string(),
                   details: err.to_string(), }
    }
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, details } => write!(f, "Cannot access '{path}': {details}."),
            Self::Malformed { details } => write!(f, "Malformed polynomial file: {details}."),
            Self::UnsupportedVersion { found } => {
                write!(f, "Unsupported polynomial file version {found}.")
            },
            Self::NonFinite { name } => write!(f,
                                               "Polynomial '{name}' has a non-finite coefficient and cannot be saved."),
        }
    }
}

impl std::error::Error for PersistError {}
