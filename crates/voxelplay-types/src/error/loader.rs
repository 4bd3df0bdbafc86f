//! Token file errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading the account token file.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum LoaderError {
    /// Token file does not exist
    #[error("Token file not found: {path}")]
    NotFound {
        /// Path that was looked up
        path: String,
    },

    /// Token file exists but holds no non-blank lines
    #[error("No tokens in file: {path}")]
    Empty {
        /// Path of the empty file
        path: String,
    },

    /// Any other I/O failure (permissions, invalid UTF-8, ...)
    #[error("Failed to read token file {path}: {message}")]
    Read {
        /// Path being read
        path: String,
        /// Underlying I/O error
        message: String,
    },
}

impl LoaderError {
    /// Classifies an I/O error raised while reading `path`.
    pub fn from_io(path: &str, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path: path.to_string() },
            _ => Self::Read { path: path.to_string(), message: err.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            LoaderError::from_io("data.txt", &err),
            LoaderError::NotFound { path: "data.txt".to_string() }
        );
    }

    #[test]
    fn test_from_io_other_keeps_message() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let classified = LoaderError::from_io("data.txt", &err);
        assert!(matches!(classified, LoaderError::Read { ref message, .. } if message == "denied"));
        assert_eq!(classified.to_string(), "Failed to read token file data.txt: denied");
    }
}
