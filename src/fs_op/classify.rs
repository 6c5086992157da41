//! Classification of raw I/O failures into logical kinds.
//!
//! The store reports unclassified failures as `StoreError::Io`; this module
//! inspects the underlying error kind (and, on Unix, the raw errno) so the
//! presentation layer can choose a message without string-matching.

use std::io;

/// Logical kind of a platform I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorClass {
    PermissionDenied,
    ResourceBusy,
    DiskFull,
    InvalidName,
    DeviceUnavailable,
    /// Anything not covered above; render the raw description.
    Other,
}

/// Classify `err` into an [`IoErrorClass`].
pub fn classify(err: &io::Error) -> IoErrorClass {
    use io::ErrorKind;
    match err.kind() {
        ErrorKind::PermissionDenied => return IoErrorClass::PermissionDenied,
        ErrorKind::StorageFull => return IoErrorClass::DiskFull,
        ErrorKind::ResourceBusy => return IoErrorClass::ResourceBusy,
        ErrorKind::InvalidInput => return IoErrorClass::InvalidName,
        _ => {}
    }

    // Error kinds do not cover every errno we care about (ENODEV has no
    // stable kind, for example), so fall back to the raw OS code.
    #[cfg(unix)]
    if let Some(code) = err.raw_os_error() {
        return match code {
            libc::EACCES | libc::EPERM => IoErrorClass::PermissionDenied,
            libc::EBUSY | libc::ETXTBSY => IoErrorClass::ResourceBusy,
            libc::ENOSPC | libc::EDQUOT => IoErrorClass::DiskFull,
            libc::EINVAL | libc::ENAMETOOLONG => IoErrorClass::InvalidName,
            libc::ENODEV | libc::ENXIO => IoErrorClass::DeviceUnavailable,
            _ => IoErrorClass::Other,
        };
    }

    IoErrorClass::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn classifies_raw_os_errors() {
        let cases = [
            (libc::EACCES, IoErrorClass::PermissionDenied),
            (libc::EPERM, IoErrorClass::PermissionDenied),
            (libc::EBUSY, IoErrorClass::ResourceBusy),
            (libc::ENOSPC, IoErrorClass::DiskFull),
            (libc::EINVAL, IoErrorClass::InvalidName),
            (libc::ENAMETOOLONG, IoErrorClass::InvalidName),
            (libc::ENODEV, IoErrorClass::DeviceUnavailable),
        ];
        for (code, expected) in cases {
            let err = io::Error::from_raw_os_error(code);
            assert_eq!(classify(&err), expected, "errno {}", code);
        }
    }

    #[test]
    fn classifies_error_kinds_without_os_code() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(classify(&err), IoErrorClass::PermissionDenied);
    }

    #[test]
    fn unknown_errors_are_other() {
        let err = io::Error::other("something odd");
        assert_eq!(classify(&err), IoErrorClass::Other);
    }
}
