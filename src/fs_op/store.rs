//! The path-confined file store.
//!
//! A [`FileStore`] owns a root directory and a current-directory cursor and
//! exposes CRUD and navigation operations. Every path it touches must
//! resolve inside the root; anything else is rejected with
//! [`StoreError::OutsideRoot`]. Operations are synchronous and blocking and
//! delegate directly to the OS: there is no queue, cache or index, and a
//! listing is recomputed on every call.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::fs_op::entry::{sort_entries, Entry};
use crate::fs_op::error::StoreError;
use crate::fs_op::helpers;
use crate::fs_op::path::resolve_confined;

pub struct FileStore {
    root: PathBuf,
    cwd: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory (and missing
    /// parents) if necessary. The root is canonicalized so containment
    /// checks compare fully resolved paths; the cursor starts at the root.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref();
        fs::create_dir_all(root)?;
        let root = root.canonicalize()?;
        Ok(FileStore { cwd: root.clone(), root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory the browsing view currently points at.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Create a file named `name` in the current directory with `content`.
    /// Fails with `AlreadyExists` if any entry (file or directory) already
    /// uses that name.
    pub fn create_file(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let path = resolve_confined(&self.root, &self.cwd.join(name))?;
        if path.symlink_metadata().is_ok() {
            return Err(StoreError::AlreadyExists(path));
        }
        helpers::atomic_write(&path, content.as_bytes())?;
        Ok(())
    }

    /// Create a single directory level named `name` in the current
    /// directory. Intermediate segments are not created.
    pub fn create_dir(&self, name: &str) -> Result<(), StoreError> {
        let path = resolve_confined(&self.root, &self.cwd.join(name))?;
        if path.symlink_metadata().is_ok() {
            return Err(StoreError::AlreadyExists(path));
        }
        fs::create_dir(&path)?;
        Ok(())
    }

    /// Read the full text contents of the file at `path`.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String, StoreError> {
        let path = resolve_confined(&self.root, path.as_ref())?;
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }
        if path.is_dir() {
            return Err(StoreError::IsADirectory(path));
        }
        Ok(fs::read_to_string(&path)?)
    }

    /// Replace the contents of the file at `path` with `content`.
    pub fn update_file(&self, path: impl AsRef<Path>, content: &str) -> Result<(), StoreError> {
        let path = resolve_confined(&self.root, path.as_ref())?;
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }
        if path.is_dir() {
            return Err(StoreError::IsADirectory(path));
        }
        helpers::atomic_write(&path, content.as_bytes())?;
        Ok(())
    }

    /// Delete the entry at `path`. Directories are removed recursively; a
    /// failure partway through surfaces as `DeleteFailed` and whatever was
    /// already removed stays removed.
    pub fn delete(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = resolve_confined(&self.root, path.as_ref())?;
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }
        if path.is_dir() {
            fs::remove_dir_all(&path)
                .map_err(|source| StoreError::DeleteFailed { path: path.clone(), source })?;
        } else {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Copy the file at `source` into `destination` and return the new
    /// path. Relative destinations resolve against the root (not the
    /// cursor). Content, permissions and timestamps are carried over; the
    /// source is left untouched.
    pub fn copy(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<PathBuf, StoreError> {
        let (source, target) = self.transfer_target(source.as_ref(), destination.as_ref())?;
        helpers::atomic_copy_file(&source, &target)?;
        Ok(target)
    }

    /// Move the file at `source` into `destination` and return the new
    /// path. Same preconditions and destination resolution as [`copy`];
    /// cross-device moves fall back to copy+delete.
    ///
    /// [`copy`]: FileStore::copy
    pub fn move_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<PathBuf, StoreError> {
        let (source, target) = self.transfer_target(source.as_ref(), destination.as_ref())?;
        helpers::rename_or_copy(&source, &target)?;
        Ok(target)
    }

    /// Rename the entry at `path`, replacing only the final segment with
    /// `new_name`, and return the new path.
    pub fn rename(&self, path: impl AsRef<Path>, new_name: &str) -> Result<PathBuf, StoreError> {
        let path = resolve_confined(&self.root, path.as_ref())?;
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }
        let parent = path
            .parent()
            .ok_or_else(|| StoreError::MissingFileName(path.clone()))?;
        let target = resolve_confined(&self.root, &parent.join(new_name))?;
        if target.symlink_metadata().is_ok() {
            return Err(StoreError::AlreadyExists(target));
        }
        fs::rename(&path, &target)?;
        Ok(target)
    }

    /// List the immediate children of the current directory, directories
    /// first, then case-insensitive name ascending.
    pub fn list(&self) -> Result<Vec<Entry>, StoreError> {
        let mut entries = Vec::new();
        for dirent in fs::read_dir(&self.cwd)? {
            let dirent = dirent?;
            let meta = dirent.metadata()?;
            let modified = meta.modified().ok().map(DateTime::<Local>::from);
            let name = dirent.file_name().to_string_lossy().into_owned();
            let path = dirent.path();
            if meta.is_dir() {
                entries.push(Entry::directory(name, path, modified));
            } else {
                entries.push(Entry::file(name, path, meta.len(), modified));
            }
        }
        sort_entries(&mut entries);
        Ok(entries)
    }

    /// Move the cursor into `path`, which must be an existing directory
    /// inside the root.
    pub fn enter(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = resolve_confined(&self.root, path.as_ref())?;
        if !path.is_dir() {
            return Err(StoreError::NotADirectory(path));
        }
        self.cwd = path;
        Ok(())
    }

    /// Move the cursor to its parent directory. At the root this is a
    /// no-op; the return value reports whether the cursor moved.
    pub fn go_up(&mut self) -> bool {
        if self.cwd == self.root {
            return false;
        }
        match self.cwd.parent() {
            Some(parent) => {
                self.cwd = parent.to_path_buf();
                true
            }
            None => false,
        }
    }

    // Shared precondition checks for copy/move: the source must be an
    // existing file, the destination an existing directory (resolved
    // against the root when relative), and the target name must be free.
    fn transfer_target(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<(PathBuf, PathBuf), StoreError> {
        let source = resolve_confined(&self.root, source)?;
        if !source.exists() {
            return Err(StoreError::NotFound(source));
        }
        if source.is_dir() {
            return Err(StoreError::NotAFile(source));
        }
        let dest_dir = self.resolve_destination(destination)?;
        let name = source
            .file_name()
            .ok_or_else(|| StoreError::MissingFileName(source.clone()))?;
        let target = dest_dir.join(name);
        if target.symlink_metadata().is_ok() {
            return Err(StoreError::AlreadyExists(target));
        }
        Ok((source, target))
    }

    fn resolve_destination(&self, folder: &Path) -> Result<PathBuf, StoreError> {
        let candidate = if folder.is_absolute() {
            folder.to_path_buf()
        } else {
            self.root.join(folder)
        };
        if !candidate.is_dir() {
            return Err(StoreError::DestinationMissing(candidate));
        }
        let resolved = candidate.canonicalize()?;
        if !resolved.starts_with(&self.root) {
            return Err(StoreError::OutsideRoot(resolved));
        }
        Ok(resolved)
    }
}
