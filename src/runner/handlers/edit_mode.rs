use crate::app::{App, Mode};
use crate::input::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a key while the editor pane has focus.
///
/// Printable keys append to the buffer; Ctrl-S saves without leaving the
/// editor; Esc returns focus to the listing.
pub fn handle_edit(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('s') = key.code {
            if let Err(e) = app.save_editor() {
                app.report(&e);
            }
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Esc => app.mode = Mode::Normal,
        KeyCode::Enter => app.editor.newline(),
        KeyCode::Backspace => app.editor.backspace(),
        KeyCode::Up => app.editor.scroll = app.editor.scroll.saturating_sub(1),
        KeyCode::Down => app.editor.scroll = app.editor.scroll.saturating_add(1),
        KeyCode::Char(c) => app.editor.push(c),
        _ => {}
    }
    Ok(false)
}
