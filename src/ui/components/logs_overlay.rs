//! Session logs overlay

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::constants::OVERLAY_TITLE_SESSION_LOGS;
use crate::logger::LogLevel;

/// Session logs overlay, newest entries first
pub struct LogsOverlay;

impl LogsOverlay {
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect(80, 70, f.area());

        let entries = app.logger.recent();
        let items: Vec<ListItem> = if entries.is_empty() {
            vec![ListItem::new("No log entries yet")]
        } else {
            entries
                .into_iter()
                .map(|entry| {
                    let style = match entry.level {
                        LogLevel::Error => Style::default().fg(Color::Red),
                        LogLevel::Info => Style::default(),
                    };
                    ListItem::new(entry.line()).style(style)
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(OVERLAY_TITLE_SESSION_LOGS),
        );

        f.render_widget(Clear, area);
        f.render_widget(list, area);
    }
}
