//! Error types for the q listing tool

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QError {
    /// Bad flags or too many path arguments
    #[error("{0}")]
    Usage(String),

    /// The target path could not be listed
    #[error("cannot list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl QError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        QError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QError::Usage(_) => 2,
            QError::Io { .. } | QError::Config(_) | QError::Output(_) => 1,
        }
    }

    /// Maps the result of writing the table to stdout.
    ///
    /// A closed reader (`q | head -1`) is not an error.
    pub fn check_output(result: io::Result<()>) -> Result<()> {
        match result {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other.map_err(QError::Output),
        }
    }
}

pub type Result<T> = std::result::Result<T, QError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path() {
        let err = QError::io(
            "/missing/dir",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let message = err.to_string();
        assert!(message.contains("/missing/dir"));
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn test_broken_pipe_is_not_an_error() {
        let closed = Err(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe"));
        assert!(QError::check_output(closed).is_ok());
        assert!(QError::check_output(Ok(())).is_ok());
    }

    #[test]
    fn test_other_write_failures_are_output_errors() {
        let full = Err(io::Error::new(io::ErrorKind::Other, "No space left on device"));
        let err = QError::check_output(full).unwrap_err();

        assert!(matches!(err, QError::Output(_)));
        assert_eq!(err.to_string(), "failed to write output: No space left on device");
        assert!(!err.to_string().contains("cannot list"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(QError::Usage("multiple paths".to_string()).exit_code(), 2);
        assert_eq!(QError::Config("no home".to_string()).exit_code(), 1);
        assert_eq!(
            QError::io(".", io::Error::new(io::ErrorKind::PermissionDenied, "denied")).exit_code(),
            1
        );
    }
}
