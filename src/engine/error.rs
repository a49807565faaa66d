//! Error types for the traversal engine
//!
//! Every I/O failure carries the path it happened on; the run aborts on the
//! first one. There is no per-file recovery or retry.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum EngineError {
    /// Source root missing at configuration time
    #[error("Source root '{}' does not exist", .0.display())]
    MissingSource(PathBuf),

    /// Failed to list a directory during traversal
    #[error("Failed to list '{}': {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    /// Failed to read a file's content
    #[error("Failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Failed to write a destination file
    #[error("Failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Failed to copy a file verbatim
    #[error("Failed to copy '{}' to '{}': {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// Failed to create a destination directory
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// Failed to delete a stale renamed directory
    #[error("Failed to delete '{}': {source}", .path.display())]
    Delete { path: PathBuf, source: io::Error },
}
