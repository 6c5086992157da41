use crate::app::editor::pop_grapheme;
use crate::app::{App, InputKind, Mode};
use crate::input::KeyCode;

/// Handle a key while an input prompt is open. Enter submits, Esc cancels.
pub fn handle_input(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    let Mode::Input { buffer, kind, .. } = &mut app.mode else {
        return Ok(false);
    };
    match code {
        KeyCode::Enter => {
            let input = std::mem::take(buffer);
            let kind = kind.clone();
            app.mode = Mode::Normal;
            submit(app, kind, input);
        }
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.set_status("Cancelled");
        }
        KeyCode::Backspace => pop_grapheme(buffer),
        KeyCode::Char(c) => buffer.push(c),
        _ => {}
    }
    Ok(false)
}

fn submit(app: &mut App, kind: InputKind, input: String) {
    // An empty name or destination cancels, matching dialog semantics.
    // Empty *content* for a new file is legitimate and creates an empty file.
    match kind {
        InputKind::NewFileName => {
            if input.is_empty() {
                app.set_status("Cancelled");
                return;
            }
            app.mode = Mode::Input {
                prompt: "(Optional) Enter content".to_string(),
                buffer: String::new(),
                kind: InputKind::NewFileContent { name: input },
            };
        }
        InputKind::NewFileContent { name } => {
            if let Err(e) = app.create_file(&name, &input) {
                app.report(&e);
            }
        }
        InputKind::NewDirName => {
            if input.is_empty() {
                app.set_status("Cancelled");
                return;
            }
            if let Err(e) = app.create_dir(&input) {
                app.report(&e);
            }
        }
        InputKind::Rename { path } => {
            if input.is_empty() {
                app.set_status("Cancelled");
                return;
            }
            if let Err(e) = app.rename_path(&path, &input) {
                app.report(&e);
            }
        }
        InputKind::CopyDest { source } => {
            if input.is_empty() {
                app.set_status("Cancelled");
                return;
            }
            if let Err(e) = app.copy_to(&source, &input) {
                app.report(&e);
            }
        }
        InputKind::MoveDest { source } => {
            if input.is_empty() {
                app.set_status("Cancelled");
                return;
            }
            if let Err(e) = app.move_to(&source, &input) {
                app.report(&e);
            }
        }
    }
}
