use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Render the current-path line at the top of the window.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let line = format!("Path: {}", app.store.cwd().display());
    let p = Paragraph::new(line).style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(p, area);
}
