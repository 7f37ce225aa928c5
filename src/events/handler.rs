//! Event handler for processing input events.

use super::InputEvent;
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, OrderId, Store, View};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// How long to wait for input before emitting a tick.
    tick_rate: Duration,
    /// Store reference for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Default)]
struct StoreSnapshot {
    current_view: View,
    selected_order_id: Option<OrderId>,
    selected_order_can_cancel: bool,
    selected_order_can_delete: bool,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keybindings: KeyBindings, tick_rate: Duration) -> Self {
        Self {
            keybindings,
            tick_rate,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        let selected_order = store.orders.selected_order();
        self.store_snapshot = Some(StoreSnapshot {
            current_view: store.app.current_view,
            selected_order_id: selected_order.map(|o| o.id),
            selected_order_can_cancel: selected_order.is_some_and(|o| o.can_cancel()),
            selected_order_can_delete: selected_order.is_some_and(|o| o.can_delete()),
        });
    }

    /// Get the next action from user input, or a tick if none arrived in time.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Action::Tick));
        }

        match event::read()? {
            CrosstermEvent::Key(key) => Ok(self.handle_key(key)),
            CrosstermEvent::Mouse(mouse) => Ok(self.handle_mouse(mouse)),
            // The next loop iteration redraws at the new size.
            _ => Ok(None),
        }
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;
        let input = InputEvent::from(key);
        let bindings = &self.keybindings;

        // Global shortcuts
        if input.matches(&bindings.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&bindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&bindings.back) || key.code == KeyCode::Backspace {
            return Some(Action::GoBack);
        }
        if input.matches(&bindings.refresh) {
            return Some(Action::Refresh);
        }
        if input.matches(&bindings.dismiss) {
            return Some(Action::DismissNotification);
        }

        // Order actions apply to the selected order in either view
        if input.matches(&bindings.cancel_order) {
            return snapshot
                .selected_order_id
                .filter(|_| snapshot.selected_order_can_cancel)
                .map(Action::CancelOrder);
        }
        if input.matches(&bindings.delete_order) {
            return snapshot
                .selected_order_id
                .filter(|_| snapshot.selected_order_can_delete)
                .map(Action::DeleteOrder);
        }

        match snapshot.current_view {
            View::Orders => self.handle_orders_view(key, input),
            View::OrderDetail => None,
        }
    }

    fn handle_orders_view(&self, key: KeyEvent, input: InputEvent) -> Option<Action> {
        if input.matches(&self.keybindings.select) {
            return Some(Action::OpenDetail);
        }
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }

        match key.code {
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::GoToTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::GoToBottom),
            _ => None,
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn handler(snapshot: StoreSnapshot) -> EventHandler {
        let mut handler = EventHandler::new(KeyBindings::default(), Duration::from_millis(250));
        handler.store_snapshot = Some(snapshot);
        handler
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn confirmed_selected() -> StoreSnapshot {
        StoreSnapshot {
            current_view: View::Orders,
            selected_order_id: Some(OrderId(3)),
            selected_order_can_cancel: true,
            selected_order_can_delete: false,
        }
    }

    #[test]
    fn test_cancel_only_for_confirmed_selection() {
        let h = handler(confirmed_selected());
        assert!(matches!(
            h.handle_key(key(KeyCode::Char('c'))),
            Some(Action::CancelOrder(OrderId(3)))
        ));
        assert!(h.handle_key(key(KeyCode::Char('d'))).is_none());
    }

    #[test]
    fn test_delete_only_for_cancelled_selection() {
        let h = handler(StoreSnapshot {
            selected_order_can_cancel: false,
            selected_order_can_delete: true,
            ..confirmed_selected()
        });
        assert!(matches!(
            h.handle_key(key(KeyCode::Char('d'))),
            Some(Action::DeleteOrder(OrderId(3)))
        ));
        assert!(h.handle_key(key(KeyCode::Char('c'))).is_none());
    }

    #[test]
    fn test_back_keys() {
        let h = handler(StoreSnapshot::default());
        assert!(matches!(h.handle_key(key(KeyCode::Esc)), Some(Action::GoBack)));
        assert!(matches!(
            h.handle_key(key(KeyCode::Backspace)),
            Some(Action::GoBack)
        ));
    }

    #[test]
    fn test_navigation_only_in_list_view() {
        let list = handler(confirmed_selected());
        assert!(matches!(
            list.handle_key(key(KeyCode::Char('j'))),
            Some(Action::ScrollDown)
        ));
        assert!(matches!(
            list.handle_key(key(KeyCode::Enter)),
            Some(Action::OpenDetail)
        ));

        let detail = handler(StoreSnapshot {
            current_view: View::OrderDetail,
            ..confirmed_selected()
        });
        assert!(detail.handle_key(key(KeyCode::Char('j'))).is_none());
        assert!(matches!(
            detail.handle_key(key(KeyCode::Char('c'))),
            Some(Action::CancelOrder(_))
        ));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let h = handler(confirmed_selected());
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert!(h.handle_key(release).is_none());
    }

    #[test]
    fn test_no_snapshot_yields_nothing() {
        let h = EventHandler::new(KeyBindings::default(), Duration::from_millis(250));
        assert!(h.handle_key(key(KeyCode::Char('q'))).is_none());
    }
}
