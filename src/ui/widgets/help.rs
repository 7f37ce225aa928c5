//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;
use crate::i18n::Messages;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings, messages: &Messages) {
        let popup_area = centered_rect(60, 70, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let mut help_text = section(messages.help_navigation);
        help_text.extend([
            entry(&format!("{}/↓", keys.down), messages.help_move_down),
            entry(&format!("{}/↑", keys.up), messages.help_move_up),
            entry("g / G", messages.help_top_bottom),
            entry(&keys.select, messages.help_details),
            entry(&keys.back, messages.help_back),
        ]);
        help_text.push(Line::from(""));
        help_text.extend(section(messages.help_orders));
        help_text.extend([
            entry(&keys.cancel_order, messages.help_cancel),
            entry(&keys.delete_order, messages.help_delete),
            entry(&keys.refresh, messages.help_refresh),
        ]);
        help_text.push(Line::from(""));
        help_text.extend(section(messages.help_general));
        help_text.extend([
            entry(&keys.dismiss, messages.help_dismiss),
            entry(&keys.help, messages.help_toggle),
            entry(&keys.quit, messages.help_quit),
        ]);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(format!(" {} ", messages.help_title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

fn section(title: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ]
}

fn entry(key: &str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<7}"), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
