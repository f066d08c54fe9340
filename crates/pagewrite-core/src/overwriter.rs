//! Destructive single-shot file write.
//!
//! The destination is created if missing and truncated if present, then the
//! payload is written in full. Missing parent directories are an error; they
//! are never created.

use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::target::Target;

/// Result of a successful overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// File that was written
    pub destination: PathBuf,

    /// Number of payload bytes written
    pub bytes: usize,
}

/// Errors that can occur while overwriting the destination.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Destination path is empty")]
    EmptyDestination,

    #[error("Path not found: {}", .path.display())]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Storage full while writing {}", .path.display())]
    StorageFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            ErrorKind::NotFound => Self::PathNotFound { path, source },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            ErrorKind::StorageFull => Self::StorageFull { path, source },
            _ => Self::Io { path, source },
        }
    }
}

/// Writes a [`Target`]'s payload over its destination.
#[derive(Debug, Clone)]
pub struct FileOverwriter {
    target: Target,
}

impl FileOverwriter {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Replace the destination's contents with the payload.
    ///
    /// No retry is attempted. A failure after the file was opened can leave
    /// it empty or partially written.
    pub fn overwrite(&self) -> Result<WriteResult, WriteError> {
        let path = self.target.destination();
        if path.as_os_str().is_empty() {
            return Err(WriteError::EmptyDestination);
        }

        let payload = self.target.payload();
        tracing::debug!("Writing {} bytes to {}", payload.len(), path.display());

        // Handle is dropped (closed) on every return path below.
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| WriteError::from_io(path, e))?;

        file.write_all(payload.as_bytes())
            .map_err(|e| WriteError::from_io(path, e))?;
        file.flush().map_err(|e| WriteError::from_io(path, e))?;

        Ok(WriteResult {
            destination: path.to_path_buf(),
            bytes: payload.len(),
        })
    }
}
