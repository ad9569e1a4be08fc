use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::PersistError,
    interpreter::evaluator::core::Bindings,
    polynomial::core::Polynomial,
};

/// Version written into every saved file.
pub const FORMAT_VERSION: u32 = 1;

/// Extension appended to file names given without one.
pub const DEFAULT_EXTENSION: &str = "json";

/// One saved polynomial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolynomialRecord {
    /// The binding name.
    pub name:         String,
    /// Coefficients, highest degree first.
    pub coefficients: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    version:     u32,
    polynomials: Vec<PolynomialRecord>,
}

#[derive(Deserialize)]
struct Header {
    version: u32,
}

/// Appends [`DEFAULT_EXTENSION`] to a path that has no extension.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use polycalc::storage::with_default_extension;
///
/// assert_eq!(with_default_extension(Path::new("work")), Path::new("work.json"));
/// assert_eq!(with_default_extension(Path::new("work.txt")), Path::new("work.txt"));
/// ```
#[must_use]
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Serializes a binding table to pretty-printed JSON.
///
/// # Errors
/// Returns `PersistError::NonFinite` if a coefficient is infinite or NaN.
pub fn to_json(bindings: &Bindings) -> Result<String, PersistError> {
    let polynomials = bindings.iter()
                              .map(|(name, polynomial)| {
                                  if polynomial.coefficients().iter().all(|c| c.is_finite()) {
                                      Ok(PolynomialRecord { name:         name.clone(),
                                                            coefficients:
                                                                polynomial.coefficients().to_vec(), })
                                  } else {
                                      Err(PersistError::NonFinite { name: name.clone() })
                                  }
                              })
                              .collect::<Result<Vec<_>, _>>()?;

    let file = TableFile { version: FORMAT_VERSION,
                           polynomials };

    serde_json::to_string_pretty(&file).map_err(|e| PersistError::Malformed { details:
                                                                                e.to_string() })
}

/// Reads a binding table from JSON.
///
/// Every record is rebuilt with [`Polynomial::from_coefficients`], so leading
/// zeros in the file are dropped. A name that appears twice keeps its last
/// record.
///
/// # Errors
/// - `PersistError::UnsupportedVersion` if the version is not
///   [`FORMAT_VERSION`].
/// - `PersistError::Malformed` if the JSON does not describe a table or a
///   name is empty or contains whitespace.
///
/// # Example
/// ```
/// use polycalc::storage::from_json;
///
/// let source = r#"{"version": 1, "polynomials": [{"Name": "p", "Coefficients": [0, 1, 2]}]}"#;
/// let bindings = from_json(source).unwrap();
/// assert_eq!(bindings["p"].coefficients(), &[1.0, 2.0]);
/// ```
pub fn from_json(source: &str) -> Result<Bindings, PersistError> {
    let malformed = |e: serde_json::Error| PersistError::Malformed { details: e.to_string() };

    let header = serde_json::from_str::<Header>(source).map_err(malformed)?;
    if header.version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion { found: header.version });
    }

    let file = serde_json::from_str::<TableFile>(source).map_err(malformed)?;

    let mut bindings = Bindings::new();
    for record in file.polynomials {
        if record.name.is_empty() || record.name.contains(char::is_whitespace) {
            return Err(PersistError::Malformed { details: format!("invalid polynomial name '{}'",
                                                                  record.name) });
        }
        let polynomial = Polynomial::from_coefficients(record.coefficients);
        if bindings.insert(record.name.clone(), polynomial).is_some() {
            warn!(name = %record.name, "duplicate polynomial record, keeping the last one");
        }
    }

    Ok(bindings)
}

/// Writes a binding table to `path`.
///
/// The file is written to a temporary file in the same directory and then
/// renamed over `path`, so an interrupted save never leaves a truncated file
/// behind.
///
/// # Errors
/// Returns `PersistError::Io` if the file cannot be written and
/// `PersistError::NonFinite` if a coefficient cannot be represented.
pub fn save(path: &Path, bindings: &Bindings) -> Result<(), PersistError> {
    let serialized = to_json(bindings)?;

    let parent = path.parent()
                     .filter(|p| !p.as_os_str().is_empty())
                     .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| PersistError::io(path, &e))?;
    tmp.write_all(serialized.as_bytes())
       .map_err(|e| PersistError::io(path, &e))?;
    tmp.persist(path)
       .map_err(|e| PersistError::io(path, &e.error))?;

    info!(path = %path.display(), count = bindings.len(), "saved polynomials");
    Ok(())
}

/// Reads a binding table from `path`.
///
/// # Errors
/// Returns `PersistError::Io` if the file cannot be read, and the errors of
/// [`from_json`] otherwise.
pub fn load(path: &Path) -> Result<Bindings, PersistError> {
    let source = fs::read_to_string(path).map_err(|e| PersistError::io(path, &e))?;
    let bindings = from_json(&source)?;

    info!(path = %path.display(), count = bindings.len(), "loaded polynomials");
    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_versioned_records() {
        let mut bindings = Bindings::new();
        bindings.insert("p".to_string(), Polynomial::from_coefficients(vec![1.0, 0.0, -2.5]));

        let json = to_json(&bindings).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["polynomials"][0]["Name"], "p");
        assert_eq!(value["polynomials"][0]["Coefficients"],
                   serde_json::json!([1.0, 0.0, -2.5]));
    }

    #[test]
    fn rejects_unknown_versions() {
        let source = r#"{"version": 2, "polynomials": "whatever"}"#;
        assert_eq!(from_json(source), Err(PersistError::UnsupportedVersion { found: 2 }));
    }

    #[test]
    fn rejects_malformed_files() {
        assert!(matches!(from_json("not json"), Err(PersistError::Malformed { .. })));
        assert!(matches!(from_json(r#"{"polynomials": []}"#),
                         Err(PersistError::Malformed { .. })));
        assert!(matches!(from_json(r#"{"version": 1, "polynomials": [{"Name": "p"}]}"#),
                         Err(PersistError::Malformed { .. })));
        assert!(matches!(from_json(r#"{"version": 1, "polynomials": [{"Name": "a b", "Coefficients": [1]}]}"#),
                         Err(PersistError::Malformed { .. })));
    }

    #[test]
    fn refuses_non_finite_coefficients() {
        let mut bindings = Bindings::new();
        bindings.insert("big".to_string(), Polynomial::constant(f64::MAX) * 10.0);
        assert_eq!(to_json(&bindings), Err(PersistError::NonFinite { name: "big".to_string() }));
    }

    #[test]
    fn duplicate_names_keep_the_last_record() {
        let source = r#"{"version": 1, "polynomials": [
            {"Name": "p", "Coefficients": [1]},
            {"Name": "p", "Coefficients": [2]}
        ]}"#;
        assert_eq!(from_json(source).unwrap()["p"], Polynomial::constant(2.0));
    }
}
