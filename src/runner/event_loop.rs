use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use crate::input::{poll, read_event, InputEvent, KeyEventKind};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

/// Run the application until the user quits. The terminal is restored even
/// when the loop exits with an error.
pub fn run_app(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, app);
    restore_terminal(terminal)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Rows available to the listing pane: total height minus the
        // header, status and help lines and the pane borders.
        let page_size = (terminal.size()?.height as usize).saturating_sub(5);

        if poll(Duration::from_millis(100))? {
            match read_event()? {
                InputEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    if handlers::handle_key(app, key, page_size)? {
                        break;
                    }
                }
                InputEvent::Key(_) | InputEvent::Resize | InputEvent::Other => {}
            }
        }
    }
    Ok(())
}
