//! Detail panel for the selected order.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::order_list::action_hint;
use crate::config::KeyBindings;
use crate::state::Store;

/// Order detail widget.
pub struct OrderDetail;

impl OrderDetail {
    /// Render the selected order's details.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let locale = store.app.locale;
        let messages = locale.messages();

        let block = Block::default()
            .title(format!(" {} ", messages.detail_title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let Some(order) = store.orders.selected_order() else {
            frame.render_widget(block, area);
            return;
        };

        let event_name = store
            .events
            .name_for(order.event_id)
            .unwrap_or(messages.event_loading);
        let status_color = if order.is_confirmed() {
            Color::Green
        } else {
            Color::Red
        };
        let action = if order.can_cancel() {
            action_hint(&keys.cancel_order, messages.action_cancel)
        } else {
            action_hint(&keys.delete_order, messages.action_delete)
        };

        let lines = vec![
            Line::from(Span::styled(
                event_name.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field(messages.col_date, locale.format_date(order.booking_date)),
            field(messages.col_tickets, order.number_of_tickets.to_string()),
            field(messages.col_amount, format!("${:.2}", order.total_amount)),
            Line::from(vec![
                label(messages.col_status),
                Span::styled(
                    order.status_label(messages),
                    Style::default().fg(status_color),
                ),
            ]),
            field(
                messages.detail_reference,
                format!("{} / {} {}", order.id, messages.detail_event, order.event_id),
            ),
            Line::from(""),
            Line::from(Span::styled(action, Style::default().fg(Color::DarkGray))),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{text:<10}"), Style::default().fg(Color::Yellow))
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![label(name), Span::raw(value)])
}
