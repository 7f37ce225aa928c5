//! Order list widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::config::KeyBindings;
use crate::state::Store;

/// Order list widget.
pub struct OrderList;

impl OrderList {
    /// Render the order list, or the loading / empty state in its place.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let locale = store.app.locale;
        let messages = locale.messages();
        let orders = &store.orders.orders;

        let block = Block::default()
            .title(format!(
                " {} ({}/{}) ",
                messages.title,
                store.orders.confirmed_count(),
                orders.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if orders.is_empty() {
            let lines = if store.orders.loaded {
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        messages.empty_orders,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        messages.empty_orders_hint,
                        Style::default().fg(Color::Blue),
                    )),
                ]
            } else {
                vec![Line::from(""), loading_line(messages.loading)]
            };
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let header_cells = [
            messages.col_event,
            messages.col_date,
            messages.col_tickets,
            messages.col_amount,
            messages.col_status,
            messages.col_action,
        ]
        .into_iter()
        .map(|h| {
            Cell::from(h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = orders.iter().map(|order| {
            let row_style = if order.is_confirmed() {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let status_style = if order.is_confirmed() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };

            let (action, action_style) = if order.can_cancel() {
                (
                    action_hint(&keys.cancel_order, messages.action_cancel),
                    Style::default().fg(Color::Magenta),
                )
            } else {
                (
                    action_hint(&keys.delete_order, messages.action_delete),
                    Style::default().fg(Color::Red),
                )
            };

            let event_name = store
                .events
                .name_for(order.event_id)
                .unwrap_or(messages.event_loading);

            let cells = vec![
                Cell::from(truncate_string(event_name, 32)),
                Cell::from(locale.format_date(order.booking_date)),
                Cell::from(order.number_of_tickets.to_string()),
                Cell::from(format!("${:.2}", order.total_amount)),
                Cell::from(order.status_label(messages)).style(status_style),
                Cell::from(action).style(action_style),
            ];

            Row::new(cells).style(row_style).height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(12),
                Constraint::Length(11),
                Constraint::Length(14),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(store.orders.selected_index);

        frame.render_stateful_widget(table, area, &mut state);

        // A refresh is in flight over an already populated list
        if store.orders.loading {
            render_loading(frame, area, messages.loading);
        }
    }
}

/// Action cell text, e.g. `[c] cancel`.
pub(crate) fn action_hint(key: &str, action: &str) -> String {
    format!("[{key}] {action}")
}

/// Shorten to `max_len` characters, ending in an ellipsis when cut.
pub(crate) fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

fn loading_line(text: &str) -> Line<'_> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    )])
}

fn render_loading(frame: &mut Frame, area: Rect, text: &str) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if inner.width < 15 || inner.height == 0 {
        return;
    }

    let loading_area = Rect {
        x: inner.x + inner.width - 15,
        y: inner.y + inner.height - 1,
        width: 15,
        height: 1,
    };

    frame.render_widget(Paragraph::new(loading_line(text)), loading_area);
}
