//! Order-related state.

use super::EventId;
use crate::i18n::Messages;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Booking identifier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ticket booking for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// The booked event.
    pub event_id: EventId,
    /// Day the booking was made for.
    pub booking_date: NaiveDate,
    /// Number of tickets.
    pub number_of_tickets: u32,
    /// Total price.
    pub total_amount: Decimal,
    /// `true` while confirmed, `false` once cancelled.
    pub booking_status: bool,
}

impl Order {
    /// Check if the booking is confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.booking_status
    }

    /// Only confirmed bookings can be cancelled.
    pub fn can_cancel(&self) -> bool {
        self.booking_status
    }

    /// Only cancelled bookings can be deleted.
    pub fn can_delete(&self) -> bool {
        !self.booking_status
    }

    /// Localized status label.
    pub fn status_label(&self, messages: &Messages) -> &'static str {
        if self.booking_status {
            messages.status_confirmed
        } else {
            messages.status_cancelled
        }
    }
}

/// State for order-related data.
#[derive(Debug, Default)]
pub struct OrderState {
    /// All orders, in server order.
    pub orders: Vec<Order>,
    /// Currently selected order index.
    pub selected_index: Option<usize>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Whether at least one fetch has settled.
    pub loaded: bool,
    /// Last successful load.
    pub last_updated: Option<DateTime<Utc>>,
}

impl OrderState {
    /// Get the currently selected order.
    pub fn selected_order(&self) -> Option<&Order> {
        self.selected_index.and_then(|i| self.orders.get(i))
    }

    /// Find an order by ID.
    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Replace the list with freshly loaded orders.
    ///
    /// The selection follows the previously selected order by ID and falls
    /// back to the nearest index. Returns `false` if a selected order is no
    /// longer in the list.
    pub fn replace(&mut self, orders: Vec<Order>) -> bool {
        let previous = self.selected_order().map(|o| o.id);
        self.orders = orders;

        let kept = previous.and_then(|id| self.orders.iter().position(|o| o.id == id));
        self.selected_index = match kept {
            Some(index) => Some(index),
            None if self.orders.is_empty() => None,
            None => Some(self.selected_index.unwrap_or(0).min(self.orders.len() - 1)),
        };
        self.loading = false;
        self.loaded = true;
        self.last_updated = Some(Utc::now());
        previous.is_none() || kept.is_some()
    }

    /// Unique event IDs referenced by the orders, in first-seen order.
    pub fn unique_event_ids(&self) -> Vec<EventId> {
        let mut seen = HashSet::new();
        self.orders
            .iter()
            .map(|o| o.event_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Mark an order as cancelled. Returns `false` if it is not in the list.
    pub fn mark_cancelled(&mut self, id: OrderId) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.booking_status = false;
                true
            }
            None => false,
        }
    }

    /// Remove an order. Returns `false` if it is not in the list.
    pub fn remove(&mut self, id: OrderId) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        if self.orders.len() == before {
            return false;
        }

        self.selected_index = match self.selected_index {
            _ if self.orders.is_empty() => None,
            Some(i) => Some(i.min(self.orders.len() - 1)),
            None => None,
        };
        true
    }

    /// Get the count of confirmed orders.
    pub fn confirmed_count(&self) -> usize {
        self.orders.iter().filter(|o| o.is_confirmed()).count()
    }
}
