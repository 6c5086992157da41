//! Preserve file metadata (permissions and timestamps) across copies.

use std::fs::{self, Permissions};
use std::io;
use std::path::Path;

use filetime::{set_file_times, FileTime};

/// Copy permission bits from `src` to `dst`.
pub(crate) fn copy_permissions(src: &Path, dst: &Path) -> io::Result<()> {
    let perms: Permissions = fs::metadata(src)?.permissions();
    fs::set_permissions(dst, perms)
}

/// Preserve permissions and access/modification times from `src` to `dst`.
///
/// Both paths must be regular files. Ownership, xattrs and ACLs are not
/// carried over; the store only promises the metadata a plain copy keeps.
pub(crate) fn preserve_file_metadata(src: &Path, dst: &Path) -> io::Result<()> {
    copy_permissions(src, dst)?;

    let meta = fs::metadata(src)?;
    let modified = FileTime::from_system_time(meta.modified()?);
    let accessed = FileTime::from_system_time(meta.accessed()?);
    set_file_times(dst, accessed, modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn permissions_and_timestamps_are_copied() -> io::Result<()> {
        let td = tempdir()?;
        let src = td.path().join("src.txt");
        let dst = td.path().join("dst.txt");
        fs::write(&src, "hello")?;
        fs::write(&dst, "world")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&src)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&src, perms)?;
        }

        let past = SystemTime::now() - Duration::from_secs(24 * 3600);
        let ft = FileTime::from_system_time(past);
        set_file_times(&src, ft, ft)?;

        preserve_file_metadata(&src, &dst)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let src_mode = fs::metadata(&src)?.permissions().mode();
            let dst_mode = fs::metadata(&dst)?.permissions().mode();
            assert_eq!(src_mode & 0o777, dst_mode & 0o777);
        }

        let src_m = fs::metadata(&src)?.modified()?;
        let dst_m = fs::metadata(&dst)?.modified()?;
        let diff = dst_m
            .duration_since(src_m)
            .unwrap_or_else(|e| e.duration());
        assert!(diff.as_secs() < 2, "timestamps differ too much");
        Ok(())
    }
}
