//! # Ticketdesk - event order management in the terminal
//!
//! A terminal user interface for a user's event-ticket orders: list bookings,
//! cancel confirmed ones, delete cancelled ones. Built with ratatui and reqwest.
//!
//! ## Architecture
//!
//! The application follows a clean architecture pattern:
//!
//! - **App**: Terminal lifecycle and the event loop
//! - **Controller**: Remote page operations (load, cancel, delete, event lookup)
//! - **API**: Booking backend client and wire types
//! - **State**: Centralized state management
//! - **Events**: Input handling
//! - **UI**: Layout and rendering logic
//! - **Config**: Configuration management
//! - **I18n**: Localized labels and notifications

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod i18n;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use controller::OrdersController;
pub use error::{Error, Result};
