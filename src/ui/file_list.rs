use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::app::{App, Mode};

/// Render the directory listing pane. Directories carry a trailing `/`.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|e| ListItem::new(e.display_name()))
        .collect();
    let focused = !matches!(app.mode, Mode::Edit);
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Files")
                .border_style(border_style),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_offset(app.offset);
    state.select((!app.entries.is_empty()).then_some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}
