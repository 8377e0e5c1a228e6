//! Error types for table setup.
//!
//! Rendering, sorting and layout never fail: they degrade to simpler output.
//! Only building a table (validating columns, loading a definition file,
//! exporting) can produce a [`TableError`].

use thiserror::Error;

/// Errors raised while defining or exporting a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Two columns share the same key.
    #[error("duplicate column key '{0}'")]
    DuplicateColumnKey(String),

    /// A column was declared with an empty key.
    #[error("column at position {0} has an empty key")]
    EmptyColumnKey(usize),

    /// YAML table definition could not be parsed.
    #[error("invalid YAML table definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON table definition or row data could not be parsed.
    #[error("invalid JSON table definition: {0}")]
    Json(#[from] serde_json::Error),

    /// An invalid sort direction appeared in a definition.
    #[error(transparent)]
    Sort(#[from] gridline_sort::SortError),

    /// CSV export failed.
    #[error("csv export failed: {0}")]
    Export(String),
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        TableError::Export(err.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for TableError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        TableError::Export(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for TableError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TableError::Export(err.to_string())
    }
}

/// Result type for table setup operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_display() {
        let err = TableError::DuplicateColumnKey("amount".to_string());
        assert_eq!(err.to_string(), "duplicate column key 'amount'");
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TableError = json_err.into();
        assert!(matches!(err, TableError::Json(_)));
    }

    #[test]
    fn sort_error_is_transparent() {
        let err: TableError = gridline_sort::SortError::InvalidDirection("up".into()).into();
        assert!(err.to_string().contains("'up'"));
    }
}
