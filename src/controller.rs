//! Page operations that talk to the booking API.
//!
//! The controller turns request actions (load, cancel, delete) into API calls
//! running on their own tasks. Each call reports back through the store's
//! action channel as state actions plus a user notification, so the event
//! loop keeps drawing and reading input while requests are in flight.
//! Failures never escape: they end up on screen or in the log.

use crate::api::BookingApi;
use crate::error::Error;
use crate::state::{Action, EventId, Notification, OrderId, Store};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Executes the orders page's remote operations.
#[derive(Clone)]
pub struct OrdersController {
    api: Arc<dyn BookingApi>,
}

impl OrdersController {
    /// Create a controller over the given API.
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    /// Handle an action. Request actions start a background task and return
    /// its handle; everything else is reduced directly.
    pub fn handle(&self, action: Action, store: &mut Store) -> Option<JoinHandle<()>> {
        match action {
            Action::LoadOrders | Action::Refresh => Some(self.load_orders(store)),
            Action::ResolveEvents => self.resolve_events(store),
            Action::CancelOrder(id) => self.cancel_order(store, id),
            Action::DeleteOrder(id) => self.delete_order(store, id),
            other => {
                store.reduce(other);
                None
            }
        }
    }

    /// Fetch the caller's bookings and queue event resolution on success.
    pub fn load_orders(&self, store: &mut Store) -> JoinHandle<()> {
        store.reduce(Action::LoadOrders);

        let api = Arc::clone(&self.api);
        let tx = store.sender();
        let messages = store.app.locale.messages();

        tokio::spawn(async move {
            match api.list_bookings().await {
                Ok(orders) => {
                    tracing::info!(count = orders.len(), "orders loaded");
                    send(&tx, Action::OrdersLoaded(orders));
                    send(&tx, Action::ResolveEvents);
                }
                Err(e) => {
                    tracing::warn!("failed to load orders: {}", e);
                    send(&tx, Action::OrdersLoadFailed);
                    send(
                        &tx,
                        Action::ShowNotification(Notification::error(user_message(
                            &e,
                            messages.load_failed,
                        ))),
                    );
                }
            }
        })
    }

    /// Look up every event the loaded orders reference, concurrently.
    ///
    /// Each unique ID is requested once. Failed lookups are logged and left
    /// out; the rest are merged into the store in one step.
    pub fn resolve_events(&self, store: &mut Store) -> Option<JoinHandle<()>> {
        let ids = store.orders.unique_event_ids();
        if ids.is_empty() {
            return None;
        }

        let api = Arc::clone(&self.api);
        let tx = store.sender();

        Some(tokio::spawn(async move {
            let lookups = ids.into_iter().map(|id| {
                let api = Arc::clone(&api);
                async move { (id, api.get_event(id).await) }
            });

            let mut resolved: HashMap<EventId, _> = HashMap::new();
            for (id, result) in join_all(lookups).await {
                match result {
                    Ok(event) => {
                        resolved.insert(id, event);
                    }
                    Err(e) => tracing::warn!(event_id = %id, "failed to fetch event: {}", e),
                }
            }

            tracing::debug!(resolved = resolved.len(), "events resolved");
            send(&tx, Action::EventsResolved(resolved));
        }))
    }

    /// Cancel a confirmed booking.
    pub fn cancel_order(&self, store: &mut Store, id: OrderId) -> Option<JoinHandle<()>> {
        if !store.orders.find(id).is_some_and(|o| o.can_cancel()) {
            tracing::debug!(order_id = %id, "ignoring cancel for unknown or cancelled order");
            return None;
        }

        let api = Arc::clone(&self.api);
        let tx = store.sender();
        let messages = store.app.locale.messages();

        Some(tokio::spawn(async move {
            match api.cancel_booking(id).await {
                Ok(()) => {
                    tracing::info!(order_id = %id, "order cancelled");
                    send(&tx, Action::OrderCancelled(id));
                    send(
                        &tx,
                        Action::ShowNotification(Notification::success(messages.cancel_succeeded)),
                    );
                }
                Err(e) => {
                    tracing::warn!(order_id = %id, "failed to cancel order: {}", e);
                    send(
                        &tx,
                        Action::ShowNotification(Notification::error(user_message(
                            &e,
                            messages.cancel_failed,
                        ))),
                    );
                }
            }
        }))
    }

    /// Delete a cancelled booking.
    pub fn delete_order(&self, store: &mut Store, id: OrderId) -> Option<JoinHandle<()>> {
        if !store.orders.find(id).is_some_and(|o| o.can_delete()) {
            tracing::debug!(order_id = %id, "ignoring delete for unknown or confirmed order");
            return None;
        }

        let api = Arc::clone(&self.api);
        let tx = store.sender();
        let messages = store.app.locale.messages();

        Some(tokio::spawn(async move {
            match api.delete_booking(id).await {
                Ok(()) => {
                    tracing::info!(order_id = %id, "order deleted");
                    send(&tx, Action::OrderDeleted(id));
                    send(
                        &tx,
                        Action::ShowNotification(Notification::success(messages.delete_succeeded)),
                    );
                }
                Err(e) => {
                    tracing::warn!(order_id = %id, "failed to delete order: {}", e);
                    send(
                        &tx,
                        Action::ShowNotification(Notification::error(messages.delete_failed)),
                    );
                }
            }
        }))
    }
}

fn send(tx: &mpsc::UnboundedSender<Action>, action: Action) {
    if tx.send(action).is_err() {
        tracing::debug!("action channel closed; dropping result");
    }
}

fn user_message(error: &Error, fallback: &str) -> String {
    error.server_message().unwrap_or(fallback).to_string()
}
