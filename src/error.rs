//! Error handling for the chart pipeline

use std::io;
use thiserror::Error;

/// Custom error type for parse, sort and render operations
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Is a directory: {file}")]
    IsDirectory { file: String },

    #[error("{input} is empty")]
    EmptyInput { input: String },

    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("file format incorrect on line {row}: {reason}")]
    Format { row: usize, reason: String },

    #[error("invalid data detected on line {row}: column {column} is not a non-negative integer ({value:?})")]
    Validation {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("cannot render chart: {message}")]
    Precondition { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Prompt aborted: {message}")]
    Prompt { message: String },
}

impl ChartError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChartError::InvalidArgument { .. } => crate::USAGE_FAILURE,

            ChartError::Prompt { .. } => crate::EXIT_FAILURE,

            _ => crate::DATA_FAILURE,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        ChartError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        ChartError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an is directory error
    pub fn is_directory(file: &str) -> Self {
        ChartError::IsDirectory {
            file: file.to_string(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(input: &str) -> Self {
        ChartError::EmptyInput {
            input: input.to_string(),
        }
    }

    /// Create a format error for a 1-based row
    pub fn format(row: usize, reason: &str) -> Self {
        ChartError::Format {
            row,
            reason: reason.to_string(),
        }
    }

    /// Create a validation error for a numeric column
    pub fn validation(row: usize, column: usize, value: &str) -> Self {
        ChartError::Validation {
            row,
            column,
            value: value.to_string(),
        }
    }

    /// Create a precondition error
    pub fn precondition(message: &str) -> Self {
        ChartError::Precondition {
            message: message.to_string(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: &str) -> Self {
        ChartError::InvalidArgument {
            message: message.to_string(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: &str) -> Self {
        ChartError::Prompt {
            message: message.to_string(),
        }
    }

    /// Row number the error points at, if any
    pub fn row(&self) -> Option<usize> {
        match self {
            ChartError::Format { row, .. } | ChartError::Validation { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Context trait for attaching the input file name to I/O errors
pub trait ChartContext<T> {
    fn with_file_context(self, filename: &str) -> ChartResult<T>;
}

impl<T> ChartContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> ChartResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => ChartError::permission_denied(filename),
            io::ErrorKind::NotFound => ChartError::file_not_found(filename),
            _ => ChartError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
