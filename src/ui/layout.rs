//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{INPUT_BAR_HEIGHT, MEMORY_PANEL_HEIGHT};

/// Resolved screen areas for one frame.
pub struct UiAreas {
    pub task_log: Rect,
    pub conversation: Rect,
    pub memory: Option<Rect>,
    pub staging: Option<Rect>,
    pub input: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the main panes: task log and conversation on
    /// top, then the optional staging bar, the input bar, and the status
    /// line across the bottom.
    #[must_use]
    pub fn main_layout(area: Rect, task_log_width: u16, staging_visible: bool, memory_visible: bool) -> UiAreas {
        let staging_height = if staging_visible { 1 } else { 0 };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(staging_height),
                Constraint::Length(INPUT_BAR_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(task_log_width.min(area.width / 2)),
                Constraint::Min(0),
            ])
            .split(rows[0]);

        let (conversation, memory) = if memory_visible {
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(MEMORY_PANEL_HEIGHT)])
                .split(columns[1]);
            (right[0], Some(right[1]))
        } else {
            (columns[1], None)
        };

        UiAreas {
            task_log: columns[0],
            conversation,
            memory,
            staging: staging_visible.then_some(rows[1]),
            input: rows[2],
            status: rows[3],
        }
    }

    /// Centered rectangle for overlays, as a percentage of the screen.
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1])[1]
    }
}
