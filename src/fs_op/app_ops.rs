//! High-level filesystem operations implemented on `App`.
//!
//! These wrap the `FileStore` primitives with the bookkeeping the UI needs:
//! refreshing the listing, clearing the editor when its file goes away, and
//! writing a one-line outcome into the status area. The store primitives
//! themselves live in `crate::fs_op::store` and are tested independently.

use std::path::Path;

use crate::app::core::App;
use crate::fs_op::error::StoreError;

impl App {
    /// Open the selected entry: enter a directory, or load a file into the
    /// content editor.
    pub fn open_selected(&mut self) -> Result<(), StoreError> {
        let Some(entry) = self.selected_entry().cloned() else {
            self.set_status("Please select a file or folder");
            return Ok(());
        };
        if entry.is_dir() {
            self.store.enter(&entry.path)?;
            self.editor.clear();
            self.selected = 0;
            self.offset = 0;
            self.refresh()?;
            self.set_status(format!("Entered folder: {}", entry.name));
        } else {
            let text = self.store.read_file(&entry.path)?;
            self.editor.open(entry.path.clone(), text);
            self.set_status(format!("Opened file: {}", entry.name));
        }
        Ok(())
    }

    /// Move the cursor up one level. At the root this only updates the
    /// status line.
    pub fn go_up(&mut self) -> Result<(), StoreError> {
        if self.store.go_up() {
            self.editor.clear();
            self.selected = 0;
            self.offset = 0;
            self.refresh()?;
            self.set_status(format!("Moved up to: {}", self.store.cwd().display()));
        } else {
            self.set_status("Cannot go back any further");
        }
        Ok(())
    }

    pub fn create_file(&mut self, name: &str, content: &str) -> Result<(), StoreError> {
        self.store.create_file(name, content)?;
        self.refresh()?;
        tracing::info!(name, "file created");
        self.set_status(format!("New file created: {}", name));
        Ok(())
    }

    pub fn create_dir(&mut self, name: &str) -> Result<(), StoreError> {
        self.store.create_dir(name)?;
        self.refresh()?;
        tracing::info!(name, "folder created");
        self.set_status(format!("New folder created: {}", name));
        Ok(())
    }

    /// Delete the entry at `path` after the UI has confirmed. The editor is
    /// cleared because the open file (or its parent) may be gone.
    pub fn delete_path(&mut self, path: &Path, name: &str) -> Result<(), StoreError> {
        self.store.delete(path)?;
        self.editor.clear();
        self.refresh()?;
        tracing::info!(path = %path.display(), "deleted");
        self.set_status(format!("Deleted: {}", name));
        Ok(())
    }

    pub fn rename_path(&mut self, path: &Path, new_name: &str) -> Result<(), StoreError> {
        let target = self.store.rename(path, new_name)?;
        self.refresh()?;
        let shown = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.display().to_string());
        self.set_status(format!("Renamed to: {}", shown));
        Ok(())
    }

    pub fn copy_to(&mut self, source: &Path, destination: &str) -> Result<(), StoreError> {
        let target = self.store.copy(source, Path::new(destination))?;
        self.refresh()?;
        tracing::info!(from = %source.display(), to = %target.display(), "copied");
        self.set_status(format!("Copied to: {}", target.display()));
        Ok(())
    }

    pub fn move_to(&mut self, source: &Path, destination: &str) -> Result<(), StoreError> {
        let target = self.store.move_file(source, Path::new(destination))?;
        self.editor.clear();
        self.refresh()?;
        tracing::info!(from = %source.display(), to = %target.display(), "moved");
        self.set_status(format!("Moved to: {}", target.display()));
        Ok(())
    }

    /// Write the editor buffer back to the file it was loaded from.
    pub fn save_editor(&mut self) -> Result<(), StoreError> {
        let Some(path) = self.editor.open_path.clone() else {
            self.set_status("No file is currently open");
            return Ok(());
        };
        self.store.update_file(&path, &self.editor.buffer)?;
        self.set_status(format!("Saved: {}", path.display()));
        Ok(())
    }
}
