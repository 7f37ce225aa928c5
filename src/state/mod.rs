//! State management for Ticketdesk.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture.

mod app_state;
mod event_state;
mod order_state;

pub use app_state::{AppState, View};
pub use event_state::{Event, EventId, EventState};
pub use order_state::{Order, OrderId, OrderState};

use crate::error::Result;
use crate::i18n::Locale;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    OpenDetail,
    GoBack,

    // Order actions
    LoadOrders,
    OrdersLoaded(Vec<Order>),
    OrdersLoadFailed,
    SelectOrder(usize),
    CancelOrder(OrderId),
    OrderCancelled(OrderId),
    DeleteOrder(OrderId),
    OrderDeleted(OrderId),

    // Event actions
    ResolveEvents,
    EventsResolved(HashMap<EventId, Event>),

    // UI actions
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,
    Tick,

    // Data refresh
    Refresh,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub created_at: Instant,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel, duration_secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration_secs,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, 3)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 10)
    }

    /// Whether the notification has outlived its display duration.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= Duration::from_secs(self.duration_secs)
    }
}

/// The page state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Order state.
    pub orders: OrderState,
    /// Resolved events.
    pub events: EventState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, locale: Locale) -> Self {
        Self {
            app: AppState::new(locale),
            orders: OrderState::default(),
            events: EventState::default(),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// A sender for reporting results from background tasks.
    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::OpenDetail => {
                if self.orders.selected_order().is_some() {
                    self.app.navigate(View::OrderDetail);
                }
            }
            Action::GoBack => {
                if self.app.show_help {
                    self.app.show_help = false;
                } else {
                    self.app.go_back();
                }
            }

            // Order actions
            Action::LoadOrders | Action::Refresh => self.orders.loading = true,
            Action::OrdersLoaded(orders) => {
                let kept = self.orders.replace(orders);
                if !kept && self.app.current_view == View::OrderDetail {
                    self.app.go_back();
                }
            }
            Action::OrdersLoadFailed => {
                self.orders.loading = false;
                self.orders.loaded = true;
            }
            Action::SelectOrder(index) => {
                if index < self.orders.orders.len() {
                    self.orders.selected_index = Some(index);
                }
            }
            // Requests; local state only changes once the server confirms.
            Action::CancelOrder(_) | Action::DeleteOrder(_) => {}
            Action::OrderCancelled(id) => {
                self.orders.mark_cancelled(id);
            }
            Action::OrderDeleted(id) => {
                self.orders.remove(id);
                if self.orders.selected_order().is_none()
                    && self.app.current_view == View::OrderDetail
                {
                    self.app.go_back();
                }
            }

            // Event actions
            Action::ResolveEvents => {}
            Action::EventsResolved(events) => self.events.merge(events),

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::PageUp => self.scroll(-10),
            Action::PageDown => self.scroll(10),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }
            Action::Tick => {
                if self
                    .app
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.is_expired(Instant::now()))
                {
                    self.app.notification = None;
                }
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    fn scroll(&mut self, delta: i32) {
        if self.orders.orders.is_empty() {
            return;
        }
        let current = self.orders.selected_index.unwrap_or(0) as i32;
        let new_index = (current + delta).max(0) as usize;
        let max_index = self.orders.orders.len() - 1;
        self.orders.selected_index = Some(new_index.min(max_index));
    }

    fn go_to_top(&mut self) {
        if !self.orders.orders.is_empty() {
            self.orders.selected_index = Some(0);
        }
    }

    fn go_to_bottom(&mut self) {
        if let Some(max) = self.orders.orders.len().checked_sub(1) {
            self.orders.selected_index = Some(max);
        }
    }
}
