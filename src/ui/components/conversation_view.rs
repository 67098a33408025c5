//! Conversation view component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use crate::conversation::BlockBody;

/// Conversation view component
pub struct ConversationView;

impl ConversationView {
    /// Render response and error blocks in first-render order
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("💬 Conversation")
            .title_alignment(Alignment::Center);

        if app.conversation.is_empty() {
            let empty = Paragraph::new("No responses yet. Type a message below and press Enter.")
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for entry in app.conversation.blocks() {
            let description = app
                .tracker
                .get(entry.id)
                .map(|record| record.description.clone())
                .unwrap_or_default();
            let header = if description.trim().is_empty() {
                format!("❯ [{}] (files only)", entry.id.short())
            } else {
                format!("❯ [{}] {description}", entry.id.short())
            };
            lines.push(Line::from(Span::styled(
                header,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));

            match &entry.body {
                BlockBody::Response { text, file_link } => {
                    for text_line in text.lines() {
                        lines.push(Line::from(text_line.to_string()));
                    }
                    if let Some(link) = file_link {
                        lines.push(Line::from(Span::styled(
                            format!("🔗 {link}"),
                            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                        )));
                    }
                }
                BlockBody::Error(message) => {
                    lines.push(Line::from(Span::styled(
                        format!("❌ {message}"),
                        Style::default().fg(Color::Red),
                    )));
                }
            }
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.conversation_scroll, 0));
        f.render_widget(paragraph, area);
    }
}
