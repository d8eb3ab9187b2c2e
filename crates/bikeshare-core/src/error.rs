use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Bikeshare Explorer.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// A dataset file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be parsed.
    #[error("Failed to parse CSV data in {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A timestamp value did not match the expected `YYYY-MM-DD HH:MM:SS` format.
    #[error("Invalid timestamp {value:?} at data row {row} of {path}")]
    TimestampParse {
        path: PathBuf,
        row: usize,
        value: String,
    },

    /// A numeric column value could not be converted.
    #[error("Invalid {column} value {value:?} at data row {row} of {path}")]
    FieldParse {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },

    /// A required column is missing from the dataset header.
    #[error("Missing required column {column:?} in {path}")]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A city name is not part of the catalog.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// The expected data directory does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the explorer crates.
pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ExplorerError::FileRead {
            path: PathBuf::from("/data/chicago.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/data/chicago.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_timestamp_parse() {
        let err = ExplorerError::TimestampParse {
            path: PathBuf::from("chicago.csv"),
            row: 17,
            value: "2017-13-99 00:00:00".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("data row 17"));
        assert!(msg.contains("2017-13-99"));
        assert!(msg.contains("chicago.csv"));
    }

    #[test]
    fn test_error_display_field_parse() {
        let err = ExplorerError::FieldParse {
            path: PathBuf::from("chicago.csv"),
            row: 3,
            column: "Birth Year",
            value: "unknown".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Birth Year"));
        assert!(msg.contains("data row 3"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = ExplorerError::MissingColumn {
            path: PathBuf::from("broken.csv"),
            column: "Start Time",
        };
        let msg = err.to_string();
        assert!(msg.contains("Start Time"));
        assert!(msg.contains("broken.csv"));
    }

    #[test]
    fn test_error_display_unknown_city() {
        let err = ExplorerError::UnknownCity("atlantis".to_string());
        assert_eq!(err.to_string(), "Unknown city: atlantis");
    }

    #[test]
    fn test_error_display_data_path_not_found() {
        let err = ExplorerError::DataPathNotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "Data path not found: /missing/dir");
    }

    #[test]
    fn test_error_display_config() {
        let err = ExplorerError::Config("bad data dir".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad data dir");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExplorerError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
