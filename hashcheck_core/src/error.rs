//! Error types for the hashcheck Core Library
//!
//! Errors are split into two categories:
//! - I/O errors: opening or reading the file being checked
//! - Validation errors: unsupported algorithms and bad configuration
//!
//! A digest mismatch is a normal outcome and never surfaces as an error.

use thiserror::Error;

pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the hashcheck Core Library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_file_not_found_error_creation() {
        let path = Path::new("/non/existent/disk.iso");
        let error = Error::Io(IoError::file_not_found(path));

        match error {
            Error::Io(io_err) => {
                assert_eq!(io_err.kind, IoErrorKind::FileNotFound);
                assert_eq!(io_err.path, Some(path.to_path_buf()));
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_unsupported_algorithm_names_input() {
        let error = Error::Validation(ValidationError::unsupported_algorithm("crc32"));

        assert!(matches!(
            error,
            Error::Validation(ValidationError::UnsupportedAlgorithm { .. })
        ));
        assert!(error.to_string().contains("crc32"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        match error {
            Error::Io(io_err) => assert_eq!(io_err.kind, IoErrorKind::FileNotFound),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let path = Path::new("/test/disk.iso");
        let error = Error::Io(IoError::open_failed(path, io_error));

        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_file_errors_include_path_context() {
        let path = std::path::PathBuf::from("/mirrors/debian-12.5.0-amd64-netinst.iso");

        let error1 = Error::Io(IoError::file_not_found(&path));
        assert!(error1.to_string().contains("debian-12.5.0-amd64-netinst.iso"));

        let read_error = io::Error::other("device went away");
        let error2 = Error::Io(IoError::read_failed(read_error).with_path(&path));
        assert!(error2.to_string().contains("debian-12.5.0-amd64-netinst.iso"));
        assert!(error2.to_string().contains("device went away"));
    }
}
