use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode};

/// Render the status line. While a prompt or confirmation is open it shows
/// that instead of the last status message.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let (line, style) = match &app.mode {
        Mode::Input { prompt, buffer, .. } => (
            format!("{}: {}_", prompt, buffer),
            Style::default().fg(Color::Yellow),
        ),
        Mode::ConfirmDelete { name, .. } => (
            format!("Delete '{}'? (y/n)", name),
            Style::default().fg(Color::Yellow),
        ),
        _ => (format!("Status: {}", app.status), Style::default()),
    };
    f.render_widget(Paragraph::new(line).style(style), area);
}
