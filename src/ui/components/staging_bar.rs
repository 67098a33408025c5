//! Staged files listing

use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::super::app::App;

/// Staged files listing, shown only while files are staged
pub struct StagingBar;

impl StagingBar {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let names = app.staging.names();
        let text = format!("📎 {} file(s) staged: {}", names.len(), names.join(", "));

        let bar = Paragraph::new(text).style(Style::default().fg(Color::Yellow));
        f.render_widget(bar, area);
    }
}
