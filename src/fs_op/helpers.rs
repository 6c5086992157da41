//! Atomic write/copy primitives shared by the store.
//!
//! Writes and copies go through a temporary sibling in the destination
//! directory which is renamed into place, so readers never observe a
//! partially-written file. Temporary files are removed on every error path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};

/// Buffer size used for buffered file copies.
const COPY_BUFFER: usize = 64 * 1024;

// A pid+timestamp suffix is unique enough for temporary siblings in a
// single-threaded store.
fn tmp_sibling(target: &Path, prefix: &str) -> io::Result<PathBuf> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(io::Error::other)?
        .as_nanos();
    let pid = std::process::id();
    Ok(dir.join(format!("{prefix}.{pid:x}{nanos:x}")))
}

/// Write `data` to `target` by writing a temporary sibling and renaming it
/// into place.
pub(crate) fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let tmp = tmp_sibling(target, ".tmp_write")?;
    match fs::write(&tmp, data) {
        Ok(()) => match fs::rename(&tmp, target) {
            Ok(()) => Ok(()),
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                Err(e)
            }
        },
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

/// Copy a single file to `dst` via a temporary sibling, then rename into
/// place. Permissions and timestamps are carried over best-effort after the
/// rename. Returns the number of bytes copied.
pub(crate) fn atomic_copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    let tmp = tmp_sibling(dst, ".tmp_copy")?;
    let mut options = CopyOptions::new();
    options.overwrite = false;
    options.buffer_size = COPY_BUFFER;
    match fs_extra_copy(src, &tmp, &options).map_err(io::Error::other) {
        Ok(n) => match fs::rename(&tmp, dst) {
            Ok(()) => {
                let _ = crate::fs_op::metadata::preserve_file_metadata(src, dst);
                Ok(n)
            }
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                Err(e)
            }
        },
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

/// Rename `src` to `dst`, falling back to copy+remove when the rename fails
/// (cross-device moves).
pub(crate) fn rename_or_copy(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(_) => {
            atomic_copy_file(src, dst)?;
            fs::remove_file(src)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn assert_no_tmp_files(dir: &Path) {
        for entry in fs::read_dir(dir).expect("read dir") {
            let name = entry.expect("entry").file_name();
            let name = name.to_string_lossy();
            assert!(!name.starts_with(".tmp_"), "temp file left behind: {}", name);
        }
    }

    #[test]
    fn atomic_write_round_trip_leaves_no_temp_files() {
        let td = tempdir().expect("tempdir");
        let target = td.path().join("out.txt");
        atomic_write(&target, b"hello").expect("write");
        assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
        assert_no_tmp_files(td.path());
    }

    #[test]
    fn atomic_write_overwrites_existing_content() {
        let td = tempdir().expect("tempdir");
        let target = td.path().join("out.txt");
        atomic_write(&target, b"a longer first version").expect("write");
        atomic_write(&target, b"short").expect("rewrite");
        assert_eq!(fs::read_to_string(&target).unwrap(), "short");
    }

    #[test]
    fn atomic_copy_file_copies_content() {
        let td = tempdir().expect("tempdir");
        let src = td.path().join("src.txt");
        let dst = td.path().join("dst.txt");
        fs::write(&src, "payload").expect("write src");
        let n = atomic_copy_file(&src, &dst).expect("copy");
        assert_eq!(n, 7);
        assert_eq!(fs::read_to_string(&dst).unwrap(), "payload");
        assert_no_tmp_files(td.path());
    }

    #[test]
    fn rename_or_copy_moves_the_file() {
        let td = tempdir().expect("tempdir");
        let src = td.path().join("src.txt");
        let dst = td.path().join("sub").join("dst.txt");
        fs::create_dir_all(dst.parent().unwrap()).expect("mkdir");
        fs::write(&src, "x").expect("write src");
        rename_or_copy(&src, &dst).expect("move");
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "x");
    }
}
