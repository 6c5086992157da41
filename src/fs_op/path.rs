use std::io;
use std::path::{Path, PathBuf};

use crate::fs_op::error::StoreError;

/// Resolve `path` and verify it stays inside `root`.
///
/// Existing paths are canonicalized; for a path that does not exist yet the
/// parent is canonicalized and the final segment re-joined, so collision
/// targets can be checked before anything is created. `root` must already
/// be canonical (the store canonicalizes it at construction).
pub(crate) fn resolve_confined(root: &Path, path: &Path) -> Result<PathBuf, StoreError> {
    let resolved = if path.exists() {
        path.canonicalize().map_err(StoreError::Io)?
    } else {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| StoreError::MissingFileName(path.to_path_buf()))?;
        let name = path
            .file_name()
            .ok_or_else(|| StoreError::MissingFileName(path.to_path_buf()))?;
        match parent.canonicalize() {
            Ok(p) => p.join(name),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(path.to_path_buf()))
            }
            Err(e) => return Err(StoreError::Io(e)),
        }
    };

    if !resolved.starts_with(root) {
        return Err(StoreError::OutsideRoot(resolved));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn existing_path_inside_root_resolves() {
        let td = tempdir().unwrap();
        let root = td.path().canonicalize().unwrap();
        let file = root.join("a.txt");
        fs::write(&file, "x").unwrap();
        let got = resolve_confined(&root, &file).unwrap();
        assert_eq!(got, file);
    }

    #[test]
    fn missing_child_of_existing_parent_resolves() {
        let td = tempdir().unwrap();
        let root = td.path().canonicalize().unwrap();
        let got = resolve_confined(&root, &root.join("new.txt")).unwrap();
        assert_eq!(got, root.join("new.txt"));
    }

    #[test]
    fn dot_dot_escape_is_rejected() {
        let td = tempdir().unwrap();
        let root = td.path().join("inner");
        fs::create_dir_all(&root).unwrap();
        let root = root.canonicalize().unwrap();
        let err = resolve_confined(&root, &root.join("../escape.txt")).unwrap_err();
        assert!(matches!(err, StoreError::OutsideRoot(_)));
    }

    #[test]
    fn path_outside_root_is_rejected() {
        let td = tempdir().unwrap();
        let other = tempdir().unwrap();
        let root = td.path().canonicalize().unwrap();
        let outside = other.path().join("file.txt");
        fs::write(&outside, "x").unwrap();
        let err = resolve_confined(&root, &outside).unwrap_err();
        assert!(matches!(err, StoreError::OutsideRoot(_)));
    }

    #[test]
    fn missing_parent_is_not_found() {
        let td = tempdir().unwrap();
        let root = td.path().canonicalize().unwrap();
        let err = resolve_confined(&root, &root.join("no_dir/new.txt")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
