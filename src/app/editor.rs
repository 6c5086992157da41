use std::path::PathBuf;

use unicode_segmentation::UnicodeSegmentation;

/// In-memory buffer for the file shown in the content pane.
///
/// The store has no notion of open state; this is the caller-side handle
/// the presentation layer keeps between a read and the next save.
#[derive(Debug, Default)]
pub struct Editor {
    /// Path the buffer was loaded from, if any.
    pub open_path: Option<PathBuf>,
    pub buffer: String,
    /// Vertical scroll offset of the content pane.
    pub scroll: u16,
}

impl Editor {
    pub fn open(&mut self, path: PathBuf, content: String) {
        self.open_path = Some(path);
        self.buffer = content;
        self.scroll = 0;
    }

    /// Forget the open file and empty the buffer.
    pub fn clear(&mut self) {
        self.open_path = None;
        self.buffer.clear();
        self.scroll = 0;
    }

    pub fn is_open(&self) -> bool {
        self.open_path.is_some()
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn newline(&mut self) {
        self.buffer.push('\n');
    }

    pub fn backspace(&mut self) {
        pop_grapheme(&mut self.buffer);
    }
}

/// Remove the last grapheme cluster from `s`, so a single backspace removes
/// a whole emoji or combining sequence rather than one code point.
pub(crate) fn pop_grapheme(s: &mut String) {
    if let Some((idx, _)) = s.grapheme_indices(true).last() {
        s.truncate(idx);
    }
}
