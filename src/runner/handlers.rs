//! Key dispatch: map key events to application operations per mode.

pub mod confirm;
pub mod edit_mode;
pub mod input_mode;

use crate::app::{App, InputKind, Mode};
use crate::input::{KeyCode, KeyEvent};

/// Dispatch a key event. Returns true when the application should exit.
pub fn handle_key(app: &mut App, key: KeyEvent, page_size: usize) -> anyhow::Result<bool> {
    match app.mode {
        Mode::Input { .. } => return input_mode::handle_input(app, key.code),
        Mode::ConfirmDelete { .. } => return confirm::handle_confirm(app, key.code),
        Mode::Edit => return edit_mode::handle_edit(app, key),
        Mode::Normal => {}
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Up => app.previous(page_size),
        KeyCode::Down => app.next(page_size),
        KeyCode::PageUp => app.page_up(page_size),
        KeyCode::PageDown => app.page_down(page_size),
        KeyCode::Enter => {
            if let Err(e) = app.open_selected() {
                app.report(&e);
            }
        }
        KeyCode::Backspace | KeyCode::Char('u') => {
            if let Err(e) = app.go_up() {
                app.report(&e);
            }
        }
        KeyCode::Char('n') => {
            app.mode = Mode::Input {
                prompt: "Enter file name".to_string(),
                buffer: String::new(),
                kind: InputKind::NewFileName,
            };
        }
        KeyCode::Char('N') => {
            app.mode = Mode::Input {
                prompt: "Enter folder name".to_string(),
                buffer: String::new(),
                kind: InputKind::NewDirName,
            };
        }
        KeyCode::Char('R') => {
            let selection = app.selected_entry().cloned();
            match selection {
                Some(entry) => {
                    app.mode = Mode::Input {
                        prompt: format!("New name for {}", entry.name),
                        buffer: String::new(),
                        kind: InputKind::Rename { path: entry.path },
                    };
                }
                None => app.set_status("Please select a file or folder"),
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let selection = app.selected_entry().cloned();
            match selection {
                Some(entry) => {
                    app.mode = Mode::ConfirmDelete {
                        path: entry.path,
                        name: entry.name,
                    };
                }
                None => app.set_status("Please select a file or folder"),
            }
        }
        KeyCode::Char('c') => prompt_transfer(app, Transfer::Copy),
        KeyCode::Char('m') => prompt_transfer(app, Transfer::Move),
        KeyCode::Char('e') => {
            if app.editor.is_open() {
                app.mode = Mode::Edit;
            } else {
                app.set_status("No file is currently open");
            }
        }
        KeyCode::Char('s') => {
            if let Err(e) = app.save_editor() {
                app.report(&e);
            }
        }
        KeyCode::Char('r') => {
            if let Err(e) = app.refresh() {
                app.report(&e);
            } else {
                app.set_status("Directory refreshed");
            }
        }
        _ => {}
    }
    Ok(false)
}

enum Transfer {
    Copy,
    Move,
}

// Copy and move only apply to files; a directory selection is refused up
// front instead of prompting for a destination that can never work.
fn prompt_transfer(app: &mut App, transfer: Transfer) {
    let Some(entry) = app.selected_entry().cloned() else {
        app.set_status("Please select a file to copy or move");
        return;
    };
    if entry.is_dir() {
        app.set_status("You can only copy or move files, not folders");
        return;
    }
    let (verb, kind) = match transfer {
        Transfer::Copy => ("copy", InputKind::CopyDest { source: entry.path }),
        Transfer::Move => ("move", InputKind::MoveDest { source: entry.path }),
    };
    app.mode = Mode::Input {
        prompt: format!("Destination folder (relative to root) to {} {}", verb, entry.name),
        buffer: String::new(),
        kind,
    };
}
