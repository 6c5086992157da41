use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by `FileStore` operations.
///
/// Every precondition failure carries the offending path so callers can
/// build a useful message. Unclassified I/O failures travel through the
/// transparent `Io` variant and are translated at the presentation
/// boundary (see `crate::errors`).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced path does not exist.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A create/rename/copy/move target collides with an existing entry.
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The operation requires a file but was given a directory.
    #[error("is a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    /// Only files may be copied or moved.
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The navigation target is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The copy/move destination folder does not exist or is not a directory.
    #[error("destination folder missing: {}", .0.display())]
    DestinationMissing(PathBuf),

    /// Recursive deletion failed partway; the tree may be partially removed.
    #[error("cannot delete {}: {source}", .path.display())]
    DeleteFailed { path: PathBuf, source: io::Error },

    /// The resolved path escapes the store root.
    #[error("outside the store root: {}", .0.display())]
    OutsideRoot(PathBuf),

    /// The path has no final segment to operate on.
    #[error("path has no file name: {}", .0.display())]
    MissingFileName(PathBuf),

    /// Wrapper for underlying I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
