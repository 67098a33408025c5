//! Agent memory snapshot panel

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

use super::super::app::App;

/// Agent memory snapshot panel
pub struct MemoryPanel;

impl MemoryPanel {
    /// Render the latest memory snapshot as an indented key/value dump
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let Some(snapshot) = app.conversation.memory() else {
            return;
        };

        let text = format_value(snapshot).join("\n");
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Magenta))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("🧠 Agent Memory")
                    .title_alignment(Alignment::Center),
            );
        f.render_widget(paragraph, area);
    }
}

/// Flatten arbitrary nested JSON into human-readable indented lines.
#[must_use]
pub fn format_value(value: &Value) -> Vec<String> {
    let mut lines = Vec::new();
    append_value(&mut lines, value, 0);
    lines
}

fn append_value(lines: &mut Vec<String>, value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                match nested {
                    Value::Object(_) | Value::Array(_) => {
                        lines.push(format!("{pad}{key}:"));
                        append_value(lines, nested, indent + 1);
                    }
                    _ => lines.push(format!("{pad}{key}: {}", scalar(nested))),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        lines.push(format!("{pad}-"));
                        append_value(lines, item, indent + 1);
                    }
                    _ => lines.push(format!("{pad}- {}", scalar(item))),
                }
            }
        }
        _ => lines.push(format!("{pad}{}", scalar(value))),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_render_as_key_value_pairs() {
        let lines = format_value(&json!({"turns": 1, "topic": "budget"}));
        assert!(lines.contains(&"turns: 1".to_string()));
        assert!(lines.contains(&"topic: budget".to_string()));
    }

    #[test]
    fn nested_objects_are_indented() {
        let lines = format_value(&json!({"session": {"turns": 3}}));
        assert_eq!(lines[0], "session:");
        assert_eq!(lines[1], "  turns: 3");
    }

    #[test]
    fn arrays_render_as_bullets() {
        let lines = format_value(&json!({"topics": ["a", "b"]}));
        assert_eq!(lines, vec!["topics:", "  - a", "  - b"]);
    }
}
