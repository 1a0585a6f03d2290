//! I/O related error types

use std::path::PathBuf;
use thiserror::Error;

/// I/O error with additional context
#[derive(Error, Debug)]
#[error("{}", format_io_error(self))]
pub struct IoError {
    /// The kind of I/O error
    pub kind: IoErrorKind,
    /// Path associated with the error (if any)
    pub path: Option<PathBuf>,
    /// Underlying I/O error (if any)
    #[source]
    pub source: Option<std::io::Error>,
}

/// Kind of I/O error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoErrorKind {
    /// File not found
    FileNotFound,
    /// Permission denied
    PermissionDenied,
    /// Path names a directory
    IsDirectory,
    /// Reading failed after the file was opened
    ReadFailed,
    /// Generic I/O error
    Other,
}

impl IoErrorKind {
    /// Whether the error happened while acquiring the file rather than streaming it
    pub fn is_access_error(&self) -> bool {
        !matches!(self, IoErrorKind::ReadFailed)
    }
}

impl IoError {
    /// Create a file not found error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        Self {
            kind: IoErrorKind::FileNotFound,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create an error for a path that names a directory
    pub fn is_directory(path: &std::path::Path) -> Self {
        Self {
            kind: IoErrorKind::IsDirectory,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create an error for a failed open, classified by the underlying error
    pub fn open_failed(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::from_std(source).with_path(path)
    }

    /// Create an error for a failed read in the middle of a stream
    pub fn read_failed(source: std::io::Error) -> Self {
        Self {
            kind: IoErrorKind::ReadFailed,
            path: None,
            source: Some(source),
        }
    }

    /// Create an I/O error from a standard I/O error
    pub fn from_std(source: std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            _ => IoErrorKind::Other,
        };

        Self {
            kind,
            path: None,
            source: Some(source),
        }
    }

    /// Create an I/O error with a path
    pub fn with_path(mut self, path: &std::path::Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

fn format_io_error(error: &IoError) -> String {
    match (&error.kind, &error.path) {
        (IoErrorKind::FileNotFound, Some(path)) => {
            format!("File not found: {}", path.display())
        }
        (IoErrorKind::FileNotFound, None) => "File not found".to_string(),
        (IoErrorKind::PermissionDenied, Some(path)) => {
            format!("Permission denied for file: {}", path.display())
        }
        (IoErrorKind::PermissionDenied, None) => "Permission denied".to_string(),
        (IoErrorKind::IsDirectory, Some(path)) => {
            format!("Path is a directory, not a file: {}", path.display())
        }
        (IoErrorKind::IsDirectory, None) => "Path is a directory, not a file".to_string(),
        (IoErrorKind::ReadFailed, path) => {
            let mut message = match path {
                Some(path) => format!("Failed to read file: {}", path.display()),
                None => "Failed to read file".to_string(),
            };
            if let Some(source) = &error.source {
                message.push_str(&format!(" ({source})"));
            }
            message
        }
        (IoErrorKind::Other, path) => {
            let mut message = match &error.source {
                Some(source) => format!("I/O error: {source}"),
                None => "I/O error".to_string(),
            };
            if let Some(path) = path {
                message.push_str(&format!(" for file: {}", path.display()));
            }
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_not_found_error() {
        let path = std::path::Path::new("/test/disk.iso");
        let error = IoError::file_not_found(path);

        assert_eq!(error.kind, IoErrorKind::FileNotFound);
        assert_eq!(error.path, Some(path.to_path_buf()));
        assert!(error.source.is_none());
        assert!(error.to_string().contains("File not found"));
        assert!(error.to_string().contains("/test/disk.iso"));
    }

    #[test]
    fn test_open_failed_classifies_permission_denied() {
        let path = std::path::Path::new("/root/protected.iso");
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let error = IoError::open_failed(path, io_error);

        assert_eq!(error.kind, IoErrorKind::PermissionDenied);
        assert_eq!(error.path, Some(path.to_path_buf()));
        assert!(error.source.is_some());
        assert!(error.to_string().contains("Permission denied"));
        assert!(error.to_string().contains("/root/protected.iso"));
    }

    #[test]
    fn test_read_failed_is_not_access_error() {
        let path = std::path::Path::new("/mnt/usb/disk.iso");
        let error = IoError::read_failed(io::Error::other("I/O failure")).with_path(path);

        assert_eq!(error.kind, IoErrorKind::ReadFailed);
        assert_eq!(error.path, Some(path.to_path_buf()));
        assert!(!error.kind.is_access_error());
        assert!(error.to_string().contains("Failed to read file"));
        assert!(error.to_string().contains("I/O failure"));
    }

    #[test]
    fn test_is_directory_error() {
        let path = std::path::Path::new("/tmp");
        let error = IoError::is_directory(path);

        assert_eq!(error.kind, IoErrorKind::IsDirectory);
        assert!(error.kind.is_access_error());
        assert!(error.to_string().contains("directory"));
    }

    #[test]
    fn test_from_std_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "Not found");
        let error = IoError::from_std(io_error);

        assert_eq!(error.kind, IoErrorKind::FileNotFound);
        assert!(error.path.is_none());
        assert!(error.source.is_some());
    }

    #[test]
    fn test_with_path() {
        let io_error = io::Error::other("Generic error");
        let path = std::path::Path::new("/test.iso");
        let error = IoError::from_std(io_error).with_path(path);

        assert_eq!(error.kind, IoErrorKind::Other);
        assert_eq!(error.path, Some(path.to_path_buf()));
        assert!(error.to_string().contains("/test.iso"));
    }
}
