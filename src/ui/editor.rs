use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Mode};

/// Render the file-content pane.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = match &app.editor.open_path {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            format!("File: {}", name)
        }
        None => "No file open".to_string(),
    };
    let border_style = if matches!(app.mode, Mode::Edit) {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let body = Paragraph::new(app.editor.buffer.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.editor.scroll, 0));
    f.render_widget(body, area);
}
