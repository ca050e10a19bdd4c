//! Error types for catalog loading and lookup.
//!
//! Every failure surfaces as a [`CatalogError`]:
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`Io`](CatalogError::Io) | Missing or unreadable catalog file |
//! | [`Format`](CatalogError::Format) | Short line, non-numeric numeric field, malformed symbol-table line |
//!
//! Loads are all-or-nothing: the first error aborts the load with no partial
//! star list. Out-of-range detail lookups are *not* errors — they return
//! `Ok(None)`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for the catalog reader.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record or symbol-table line does not match the expected format.
    ///
    /// `line` is 1-based, matching the physical line in the file.
    #[error("{file}:{line}: {message}")]
    Format {
        file: String,
        line: usize,
        message: String,
    },
}

impl CatalogError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(file: &Path, line: usize, message: impl ToString) -> Self {
        CatalogError::Format {
            file: file.display().to_string(),
            line,
            message: message.to_string(),
        }
    }
}

/// Convenience alias for `Result<T, CatalogError>`.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_carries_location() {
        let err = CatalogError::format(Path::new("bsc5.dat"), 42, "line is 10 bytes");
        assert_eq!(err.to_string(), "bsc5.dat:42: line is 10 bytes");
    }

    #[test]
    fn test_io_error_names_path() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CatalogError::io(Path::new("data/bsc5.dat"), inner);
        assert!(err.to_string().contains("data/bsc5.dat"));
    }
}
