//! Event handling for Ticketdesk.
//!
//! Terminal input is read here and mapped to store actions according to the
//! configured key bindings.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
