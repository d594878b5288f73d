//! Error types for cntrlib

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while walking trees and scanning files
#[derive(Error, Debug)]
pub enum CntrError {
    /// Failed to open or read a file
    #[error("could not open \"{path}\" for reading: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to open or list a directory
    #[error("could not open dir {path}: {source}")]
    DirRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A search root exists but is not a directory
    #[error("could not open dir {0}: not a directory")]
    NotADirectory(PathBuf),
}

impl CntrError {
    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            CntrError::FileRead { path, .. } | CntrError::DirRead { path, .. } => path,
            CntrError::NotADirectory(path) => path,
        }
    }

    /// Convert a walkdir error into a directory read error.
    ///
    /// walkdir only reports failures while opening or listing directories
    /// (or resolving entry metadata), so the directory variant fits.
    pub(crate) fn from_walk(err: walkdir::Error, fallback: &Path) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf());
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other(message));
        CntrError::DirRead { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_read_message_names_path() {
        let err = CntrError::FileRead {
            path: PathBuf::from("src/main.c"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("could not open \"src/main.c\" for reading"));
        assert_eq!(err.path(), Path::new("src/main.c"));
    }

    #[test]
    fn test_not_a_directory_message() {
        let err = CntrError::NotADirectory(PathBuf::from("notes.txt"));
        assert_eq!(
            err.to_string(),
            "could not open dir notes.txt: not a directory"
        );
    }

    #[test]
    fn test_walk_error_keeps_failing_path() {
        let err = walkdir::WalkDir::new("/definitely/not/here")
            .into_iter()
            .find_map(|e| e.err())
            .unwrap();
        let err = CntrError::from_walk(err, Path::new("root"));
        assert_eq!(err.path(), Path::new("/definitely/not/here"));
        assert!(matches!(err, CntrError::DirRead { .. }));
    }
}
