//! User-facing translation of store errors.
//!
//! The core reports typed errors; this module turns them into the strings
//! the status line shows. Platform I/O failures are classified first (see
//! `fs_op::classify`) so the common cases get a plain-language message and
//! everything else falls back to the raw description.

use std::io;

use crate::fs_op::classify::{classify, IoErrorClass};
use crate::fs_op::StoreError;

/// Render `err` as a message suitable for the status line.
pub fn user_message(err: &StoreError) -> String {
    match err {
        StoreError::NotFound(p) => format!("File not found: {}", p.display()),
        StoreError::AlreadyExists(_) => {
            "A file or folder with that name already exists".to_string()
        }
        StoreError::IsADirectory(_) => {
            "Please select a file. Cannot open a directory as a file".to_string()
        }
        StoreError::NotAFile(_) => "You can only copy or move files, not folders".to_string(),
        StoreError::NotADirectory(_) => "The selected item is not a directory".to_string(),
        StoreError::DestinationMissing(_) => {
            "Destination folder selected does not exist".to_string()
        }
        StoreError::DeleteFailed { source, .. } => {
            format!("Cannot delete: {}", io_message(source))
        }
        StoreError::OutsideRoot(_) => "That path is outside the managed folder".to_string(),
        StoreError::MissingFileName(_) => "Invalid file name or path".to_string(),
        StoreError::Io(e) => io_message(e),
    }
}

fn io_message(e: &io::Error) -> String {
    match classify(e) {
        IoErrorClass::PermissionDenied => {
            "You do not have permission to access or modify this file".to_string()
        }
        IoErrorClass::ResourceBusy => {
            "This file is currently in use by another process".to_string()
        }
        IoErrorClass::DiskFull => "There is not enough space on the disk".to_string(),
        IoErrorClass::InvalidName => "Invalid file name or path".to_string(),
        IoErrorClass::DeviceUnavailable => "Network drive unavailable".to_string(),
        IoErrorClass::Other => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn collision_message_is_friendly() {
        let err = StoreError::AlreadyExists(PathBuf::from("/r/a.txt"));
        assert_eq!(
            user_message(&err),
            "A file or folder with that name already exists"
        );
    }

    #[cfg(unix)]
    #[test]
    fn disk_full_maps_to_space_message() {
        let err = StoreError::Io(io::Error::from_raw_os_error(libc::ENOSPC));
        assert_eq!(user_message(&err), "There is not enough space on the disk");
    }

    #[test]
    fn unclassified_io_error_keeps_raw_description() {
        let err = StoreError::Io(io::Error::other("weird failure"));
        assert!(user_message(&err).contains("weird failure"));
    }
}
