use std::cmp::min;

use super::*;

impl App {
    /// Move the selection down by one entry.
    pub fn next(&mut self, list_height: usize) {
        if !self.entries.is_empty() && self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
        self.ensure_selection_visible(list_height);
    }

    /// Move the selection up by one entry.
    pub fn previous(&mut self, list_height: usize) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.ensure_selection_visible(list_height);
    }

    /// Move the selection down by `list_height` (page down) with clamping.
    pub fn page_down(&mut self, list_height: usize) {
        if !self.entries.is_empty() {
            self.selected = min(
                self.selected.saturating_add(list_height),
                self.entries.len().saturating_sub(1),
            );
        }
        self.ensure_selection_visible(list_height);
    }

    /// Move the selection up by `list_height` (page up) with saturating
    /// subtraction so it never underflows.
    pub fn page_up(&mut self, list_height: usize) {
        self.selected = self.selected.saturating_sub(list_height);
        self.ensure_selection_visible(list_height);
    }

    /// Adjust `offset` so the selected entry is visible within a viewport
    /// of `height` rows.
    pub fn ensure_selection_visible(&mut self, height: usize) {
        if height == 0 || self.entries.is_empty() {
            self.offset = 0;
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
            return;
        }
        let max_offset = self.entries.len().saturating_sub(height);
        if self.selected >= self.offset + height {
            self.offset = min(self.selected + 1 - height, max_offset);
        } else if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}
