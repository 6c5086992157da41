use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single child of the browsed directory.
///
/// Entries are ephemeral: they are rebuilt on every listing and never cached
/// across calls, so a stale `Entry` may point at a path that no longer
/// exists. Operations re-validate before acting.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display name (final path segment).
    pub name: String,
    /// Full path of the entry.
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes; zero for directories.
    pub size: u64,
    /// Last modification time, when the platform reports one.
    pub modified: Option<DateTime<Local>>,
}

impl Entry {
    pub fn file(name: String, path: PathBuf, size: u64, modified: Option<DateTime<Local>>) -> Self {
        Entry { name, path, kind: EntryKind::File, size, modified }
    }

    pub fn directory(name: String, path: PathBuf, modified: Option<DateTime<Local>>) -> Self {
        Entry { name, path, kind: EntryKind::Directory, size: 0, modified }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Name as shown in the listing pane: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        match self.kind {
            EntryKind::Directory => format!("{}/", self.name),
            EntryKind::File => self.name.clone(),
        }
    }
}

/// Sort entries for display: directories before files, then case-insensitive
/// name ascending. `sort_by_key` computes the lowercase key once per element
/// instead of on every comparison.
pub(crate) fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_key(|e| (!e.is_dir(), e.name.to_lowercase()));
}
