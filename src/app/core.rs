use std::cmp::min;

use crate::app::editor::Editor;
use crate::app::types::Mode;
use crate::fs_op::{Entry, FileStore, StoreError};

pub mod navigation;

/// Application state: the store plus everything the UI renders.
///
/// The store instance is injected here rather than living in a global, so
/// tests can drive the whole application against a temporary directory.
pub struct App {
    pub store: FileStore,
    /// Listing of the store's current directory.
    pub entries: Vec<Entry>,
    /// Index of the selected entry within `entries`.
    pub selected: usize,
    /// Scroll offset (index of the top-most visible entry).
    pub offset: usize,
    pub editor: Editor,
    pub mode: Mode,
    /// Outcome of the last action, shown in the status line.
    pub status: String,
}

impl App {
    pub fn new(store: FileStore) -> Result<Self, StoreError> {
        let mut app = App {
            store,
            entries: Vec::new(),
            selected: 0,
            offset: 0,
            editor: Editor::default(),
            mode: Mode::Normal,
            status: String::from("Ready"),
        };
        app.refresh()?;
        Ok(app)
    }

    /// Re-read the current directory listing and clamp the selection.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.entries = self.store.list()?;
        self.selected = min(self.selected, self.entries.len().saturating_sub(1));
        Ok(())
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Record a failed operation: log it and surface the user-facing
    /// translation in the status line.
    pub fn report(&mut self, err: &StoreError) {
        tracing::warn!(error = %err, "operation failed");
        self.status = format!("Error: {}", crate::errors::user_message(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn refresh_lists_entries_sorted_for_display() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("zeta").write_str("z").unwrap();
        temp.child("Alpha").create_dir_all().unwrap();
        temp.child("beta").write_str("b").unwrap();

        let store = FileStore::open(temp.path()).unwrap();
        let app = App::new(store).unwrap();
        let names: Vec<&str> = app.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "beta", "zeta"]);

        temp.close().unwrap();
    }

    #[test]
    fn refresh_clamps_selection_when_entries_disappear() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.txt").write_str("1").unwrap();
        temp.child("b.txt").write_str("2").unwrap();

        let store = FileStore::open(temp.path()).unwrap();
        let mut app = App::new(store).unwrap();
        app.selected = 1;
        std::fs::remove_file(temp.child("b.txt").path()).unwrap();
        app.refresh().unwrap();
        assert_eq!(app.selected, 0);

        temp.close().unwrap();
    }
}
