// src/error.rs

use thiserror::Error;

/// Everything that can go wrong while loading or querying a [`crate::Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source could not be opened or read.
    #[error("cannot read course data from `{source_name}`")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// A data line did not match the expected 23-field layout.
    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    /// A query was called with an argument it does not understand.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        CatalogError::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Map a `csv` reader failure onto either the I/O or the malformed-content kind.
    pub(crate) fn from_csv(err: csv::Error, source_name: &str) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => CatalogError::Io {
                source_name: source_name.to_string(),
                source,
            },
            _ => CatalogError::malformed(line, reason),
        }
    }
}
