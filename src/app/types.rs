use std::path::PathBuf;

/// What an input prompt is collecting.
///
/// Prompts snapshot the path they operate on when they open, so a listing
/// refresh between prompt and submit cannot redirect the operation.
#[derive(Debug, Clone)]
pub enum InputKind {
    /// Name for a new file; submitting chains into `NewFileContent`.
    NewFileName,
    /// Optional initial content for the new file named `name`.
    NewFileContent { name: String },
    /// Name for a new directory.
    NewDirName,
    /// New name for the entry at `path`.
    Rename { path: PathBuf },
    /// Destination folder for copying `source`.
    CopyDest { source: PathBuf },
    /// Destination folder for moving `source`.
    MoveDest { source: PathBuf },
}

/// UI interaction mode.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Browsing the listing; keys act on the selection.
    Normal,
    /// Collecting a line of text in the status area.
    Input {
        prompt: String,
        buffer: String,
        kind: InputKind,
    },
    /// Waiting for y/n before deleting `name` at `path`.
    ConfirmDelete { path: PathBuf, name: String },
    /// Keys go to the content editor.
    Edit,
}
