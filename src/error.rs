//! Global error handling for projsnap
//!
//! Only failures that end a run live here: an inaccessible project root, bad
//! configuration and output write errors. Per-file read problems never become
//! errors, they are carried as placeholder content instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for projsnap operations
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scanner errors (the project root itself could not be read)
    #[error("Scanner error: {0}")]
    Scanner(String),

    /// An output document could not be written
    #[error("Failed to write {}: {}", path.display(), source)]
    Writer {
        /// Destination that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// JSON processing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for projsnap operations
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Creates a SnapshotError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::SnapshotError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Lets io::Result-based callers (and tests) use `?` on projsnap results
impl From<SnapshotError> for io::Error {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_positive(value: usize) -> Result<usize> {
        crate::ensure!(value > 0, InvalidArgument, "value must be positive, got {}", value);
        Ok(value)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(check_positive(3).unwrap(), 3);

        let err = check_positive(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: value must be positive, got 0"
        );
    }

    #[test]
    fn test_writer_error_mentions_path() {
        let err = SnapshotError::Writer {
            path: PathBuf::from("out/SNAP.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write out/SNAP.md: denied");
    }
}
