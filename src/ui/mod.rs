//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{HelpPanel, KeyHints, OrderDetail, OrderList, StatusBar};

use crate::config::KeyBindings;
use crate::state::{Store, View};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, keys: &KeyBindings) {
        let layout = Layout::new(frame.area());

        StatusBar::render(frame, layout.status_area, store, keys);

        match store.app.current_view {
            View::Orders => OrderList::render(frame, layout.main_area, store, keys),
            View::OrderDetail => OrderDetail::render(frame, layout.main_area, store, keys),
        }

        KeyHints::render(frame, layout.hint_area, store, keys);

        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), keys, store.app.locale.messages());
        }

        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::state::{Action, Event, EventId, Notification, Order, OrderId};
    use chrono::NaiveDate;
    use ratatui::{Terminal, backend::TestBackend};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use tokio::sync::mpsc;

    fn draw(store: &Store) -> String {
        draw_with(store, &KeyBindings::default())
    }

    fn draw_with(store: &Store, keys: &KeyBindings) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 16)).unwrap();
        terminal
            .draw(|frame| Ui::render(frame, store, keys))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn store() -> Store {
        store_in(Locale::En)
    }

    fn store_in(locale: Locale) -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx, locale)
    }

    fn order(id: u64, event_id: u64, confirmed: bool) -> Order {
        Order {
            id: OrderId(id),
            event_id: EventId(event_id),
            booking_date: NaiveDate::from_ymd_opt(2024, 10, 2).unwrap(),
            number_of_tickets: 3,
            total_amount: dec!(45.5),
            booking_status: confirmed,
        }
    }

    #[test]
    fn test_loading_state_before_first_fetch() {
        let mut store = store();
        store.reduce(Action::LoadOrders);
        assert!(draw(&store).contains("Loading..."));
    }

    #[test]
    fn test_empty_state_after_fetch() {
        let mut store = store();
        store.reduce(Action::OrdersLoaded(Vec::new()));
        assert!(draw(&store).contains("You don't have any event orders yet."));
    }

    #[test]
    fn test_rows_render_with_partial_event_resolution() {
        let mut store = store();
        store.reduce(Action::OrdersLoaded(vec![order(1, 1, true), order(2, 2, false)]));
        store.reduce(Action::EventsResolved(HashMap::from([(
            EventId(1),
            Event {
                id: EventId(1),
                name: "Riverside Jazz".into(),
            },
        )])));

        let screen = draw(&store);
        assert!(screen.contains("Riverside Jazz"));
        assert!(screen.contains("Loading..."));
        assert!(screen.contains("10/2/2024"));
        assert!(screen.contains("$45.50"));
        assert!(screen.contains("Confirmed"));
        assert!(screen.contains("Cancelled"));
    }

    #[test]
    fn test_detail_view_and_notification() {
        let mut store = store();
        store.reduce(Action::OrdersLoaded(vec![order(9, 4, true)]));
        store.reduce(Action::OpenDetail);
        store.reduce(Action::ShowNotification(Notification::success(
            "Order cancelled",
        )));

        let screen = draw(&store);
        assert!(screen.contains("Order Details"));
        assert!(screen.contains("9 / event 4"));
        assert!(screen.contains("Order cancelled"));
    }

    #[test]
    fn test_help_overlay() {
        let mut store = store();
        store.reduce(Action::ToggleHelp);
        assert!(draw(&store).contains("Move down"));
    }

    #[test]
    fn test_hints_follow_configured_keys() {
        let keys = KeyBindings {
            cancel_order: "u".into(),
            help: "h".into(),
            ..KeyBindings::default()
        };
        let mut store = store();
        store.reduce(Action::OrdersLoaded(vec![order(1, 1, true)]));

        let screen = draw_with(&store, &keys);
        assert!(screen.contains("[u] cancel"));
        assert!(screen.contains("u cancel"));
        assert!(screen.contains(" h help "));
        assert!(!screen.contains("[c] cancel"));
    }

    #[test]
    fn test_chinese_detail_and_help() {
        let mut store = store_in(Locale::Zh);
        store.reduce(Action::OrdersLoaded(vec![order(9, 4, true)]));
        store.reduce(Action::OpenDetail);

        // Wide glyphs leave padding cells behind them
        let screen = draw(&store).replace(' ', "");
        assert!(screen.contains("订单号"));
        assert!(screen.contains("9/活动4"));
        assert!(screen.contains("[c]取消订单"));
        assert!(!screen.contains("event"));

        store.reduce(Action::ToggleHelp);
        let screen = draw(&store).replace(' ', "");
        assert!(screen.contains("下移"));
        assert!(!screen.contains("Movedown"));
    }
}
