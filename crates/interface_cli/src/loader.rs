//! JSON data loading
//!
//! Reads the invoice array and play catalog from disk. Parsing also
//! enforces model invariants such as non-negative audience sizes.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use domain_statement::{Invoice, PlayCatalog};

/// Errors raised while loading input data
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a JSON array of invoices
pub fn load_invoices(path: &Path) -> Result<Vec<Invoice>, LoadError> {
    load_json(path)
}

/// Loads a JSON object of plays keyed by play id
pub fn load_plays(path: &Path) -> Result<PlayCatalog, LoadError> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    tracing::debug!(path = %path.display(), "Loading data file");

    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_file(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    #[test]
    fn test_loads_bundled_invoices() {
        let invoices = load_invoices(&data_file("invoices.json")).unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].customer, "BigCo");
        assert_eq!(invoices[0].performances.len(), 3);
    }

    #[test]
    fn test_loads_bundled_plays() {
        let plays = load_plays(&data_file("plays.json")).unwrap();
        assert_eq!(plays.len(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_plays(&data_file("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        // The invoice file is an array, not a play catalog
        let err = load_plays(&data_file("invoices.json")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
