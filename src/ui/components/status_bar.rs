//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let in_flight = app.tracker.in_flight();

        let status_text = if let Some(error) = &app.error_message {
            error.clone()
        } else if let Some(info) = &app.info_message {
            info.clone()
        } else if in_flight > 0 {
            format!("🔄 {in_flight} task(s) in progress...")
        } else {
            // Show helpful shortcuts and status
            "Enter: send • ^A: attach • ^X: clear files • ^O: memory • ^G: logs • ^C: quit".to_string()
        };

        let status_color = if app.error_message.is_some() {
            Color::Red
        } else if in_flight > 0 {
            Color::Yellow
        } else if app.info_message.is_some() {
            Color::Green
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
