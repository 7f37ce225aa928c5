//! Status bar and key hint widgets.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;
use crate::state::{Store, View};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let messages = store.app.locale.messages();

        let loading = if store.orders.loading {
            Span::styled(
                format!(" {} ", messages.loading),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw("")
        };

        let updated = store
            .orders
            .last_updated
            .map(|t| {
                t.with_timezone(&chrono::Local)
                    .format("%H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| "--:--:--".to_string());

        let help_hint = Span::styled(
            format!(" {} {} ", keys.help, messages.hint_help),
            Style::default().fg(Color::Gray),
        );

        let left_content = vec![
            Span::styled(
                " 🎫 Ticketdesk ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(messages.title, Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled(updated, Style::default().fg(Color::Gray)),
            loading,
        ];

        // Right-align the help hint
        let left_width: usize = left_content.iter().map(|s| s.width()).sum();
        let padding = (area.width as usize).saturating_sub(left_width + help_hint.width());

        let mut full_line = left_content;
        full_line.push(Span::raw(" ".repeat(padding)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}

/// Bottom line listing the keys that act in the current view.
pub struct KeyHints;

impl KeyHints {
    /// Render the key hints.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let messages = store.app.locale.messages();
        let up_down = format!("{}/{}/↑↓", keys.up, keys.down);

        let hints: Vec<(&str, &str)> = match store.app.current_view {
            View::Orders => vec![
                (up_down.as_str(), messages.hint_select),
                (keys.select.as_str(), messages.hint_details),
                (keys.cancel_order.as_str(), messages.action_cancel),
                (keys.delete_order.as_str(), messages.action_delete),
                (keys.refresh.as_str(), messages.hint_refresh),
                (keys.back.as_str(), messages.hint_back),
            ],
            View::OrderDetail => vec![
                (keys.cancel_order.as_str(), messages.action_cancel),
                (keys.delete_order.as_str(), messages.action_delete),
                (keys.back.as_str(), messages.hint_back),
            ],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, what) in hints {
            spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {what}  "),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
