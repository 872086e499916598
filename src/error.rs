//! Error types returned by the sample readers and the command line tool.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while reading samples or validating arguments.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open or read a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or convert a data frame.
    #[error("Failed to read the data frame: {0}")]
    Polars(#[from] PolarsError),

    /// `SampleReader::read` was called before `SampleReader::file`.
    #[error("The file name for the CSV file is not set")]
    MissingFile,

    /// The class column is absent.
    #[error("Target (class) column `{0}` does not exist")]
    MissingTarget(String),

    /// A cell holds a value other than `0` or `1`.
    #[error("Column `{column}` has a non-binary value `{value}` at row {row}")]
    NonBinary {
        /// Column name.
        column: String,
        /// Row number, starting from `0`.
        row: usize,
        /// The offending value.
        value: String,
    },

    /// A cell is empty or not an integer.
    #[error("Column `{column}` has a missing value at row {row}")]
    MissingValue {
        /// Column name.
        column: String,
        /// Row number, starting from `0`.
        row: usize,
    },

    /// Two feature-name sets that must agree do not.
    #[error("Feature sets differ: expected {expected:?}, found {found:?}")]
    FeatureMismatch {
        /// Feature names of the reference sample.
        expected: Vec<String>,
        /// Feature names found instead.
        found: Vec<String>,
    },

    /// Training was requested on a sample without rows.
    #[error("Cannot train a decision tree on an empty sample")]
    EmptySample,

    /// A user-supplied argument is out of range or unparsable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type used throughout `miniid3`.
pub type Result<T> = std::result::Result<T, Error>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingTarget("Class".to_string());
        assert!(format!("{err}").contains("`Class`"));

        let err = Error::NonBinary {
            column: "XB".to_string(),
            row: 3,
            value: "2".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("XB"));
        assert!(msg.contains("row 3"));
        assert!(msg.contains("`2`"));

        let err = Error::EmptySample;
        assert!(format!("{err}").contains("empty sample"));
    }


    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
    }
}
