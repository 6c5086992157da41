use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

pub mod editor;
pub mod file_list;
pub mod header;
pub mod status;

const HELP_LINE: &str =
    "↑/↓ move  Enter open  Backspace up  n new file  N new folder  R rename  d delete  c copy  m move  e edit  s save  q quit";

/// Draw the whole frame: path header, listing and editor panes, status
/// line (which doubles as the prompt line) and the help line.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    header::render(f, chunks[0], app);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[1]);
    file_list::render(f, main[0], app);
    editor::render(f, main[1], app);

    status::render(f, chunks[2], app);

    let help = Paragraph::new(HELP_LINE).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
