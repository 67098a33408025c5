//! Message / attach-path input bar

use ratatui::{
    layout::Position,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::app::{App, InputMode};

/// Message / attach-path input bar
pub struct InputBar;

impl InputBar {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let (title, text, border_color) = match app.mode {
            InputMode::Message => (" Message • Enter to send ", app.input.as_str(), Color::White),
            InputMode::AttachPath => (
                " Attach file • type a path • Enter to stage • Esc to cancel ",
                app.attach_input.as_str(),
                Color::Yellow,
            ),
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(title),
        );
        f.render_widget(input, area);

        // Place the cursor after the typed text, clamped to the inner width
        let cursor_x = (text.chars().count() as u16).min(area.width.saturating_sub(2));
        f.set_cursor_position(Position::new(area.x + 1 + cursor_x, area.y + 1));
    }
}
