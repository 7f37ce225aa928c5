//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Width of the notification toast, before clamping to the terminal.
const TOAST_WIDTH: u16 = 48;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Main content area.
    pub main_area: Rect,
    /// Key hint area (bottom).
    pub hint_area: Rect,
    /// Notification area (overlaid, top right).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let width = TOAST_WIDTH.min(area.width);
        let notification_area = Rect {
            x: area.x + area.width - width,
            y: area.y + 1.min(area.height),
            width,
            height: 3.min(area.height.saturating_sub(1)),
        };

        Self {
            status_area: chunks[0],
            main_area: chunks[1],
            hint_area: chunks[2],
            notification_area,
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
