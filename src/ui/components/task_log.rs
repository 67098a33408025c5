//! Task lifecycle log component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::tracker::{TaskRecord, TaskStatus};

/// Task lifecycle log component
pub struct TaskLog;

impl TaskLog {
    /// Render the lifecycle log, oldest submission first
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("📋 Tasks")
            .title_alignment(Alignment::Center);

        if app.tracker.is_empty() {
            let empty = List::new(vec![ListItem::new("No tasks yet")]).block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = app
            .tracker
            .tasks()
            .iter()
            .map(|record| Self::task_item(record, area.width))
            .collect();

        f.render_widget(List::new(items).block(block), area);
    }

    fn task_item(record: &TaskRecord, width: u16) -> ListItem<'static> {
        let (symbol, color) = Self::status_style(record.status);

        let description = if record.description.trim().is_empty() {
            "(files only)".to_string()
        } else {
            record.description.clone()
        };

        // Keep one line per task; borders eat two columns
        let budget = (width.saturating_sub(14)) as usize;
        let description: String = description.chars().take(budget.max(4)).collect();

        ListItem::new(Line::from(vec![
            Span::styled(format!("{symbol} "), Style::default().fg(color)),
            Span::styled(
                format!("{} ", record.id.short()),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ),
            Span::raw(description),
        ]))
    }

    fn status_style(status: TaskStatus) -> (&'static str, Color) {
        match status {
            TaskStatus::Pending => ("⋯", Color::Gray),
            TaskStatus::InProgress => ("🔄", Color::Yellow),
            TaskStatus::Completed => ("✅", Color::Green),
            TaskStatus::Error => ("❌", Color::Red),
        }
    }
}
