use crate::app::{App, Mode};
use crate::input::KeyCode;

/// Handle a key while the delete confirmation is open.
pub fn handle_confirm(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    let Mode::ConfirmDelete { path, name } = app.mode.clone() else {
        return Ok(false);
    };
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.mode = Mode::Normal;
            if let Err(e) = app.delete_path(&path, &name) {
                app.report(&e);
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.set_status("Cancelled");
        }
        _ => {}
    }
    Ok(false)
}
