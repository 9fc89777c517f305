//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while reading trace and text files
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot read {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse line: {0:?}")]
    InvalidLine(String),

    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
}

/// Errors that can occur while loading line images
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("cannot read {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] image::ImageError),
}

/// Errors that abort a corpus walk
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("cannot walk {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error returned by the caller's handler, passed through unchanged
    #[error(transparent)]
    Handler(anyhow::Error),
}

impl From<walkdir::Error> for WalkError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        WalkError::Traversal {
            path,
            source: err.into(),
        }
    }
}

/// Errors that can occur while running an external OCR command
#[derive(Error, Debug)]
pub enum RunError {
    #[error("no executable given")]
    EmptyCommand,

    #[error("cannot start {exe}: {source}")]
    Spawn {
        exe: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while running command: {0}")]
    Io(#[from] std::io::Error),

    #[error("command timed out after {0:?}")]
    Timeout(Duration),

    #[error("command failed with {status}")]
    Failed { status: ExitStatus, output: Vec<u8> },
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to read report {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid report {}: {source}", .path.display())]
    InvalidReport {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
