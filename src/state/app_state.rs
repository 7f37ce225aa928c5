//! Application-level state.

use super::Notification;
use crate::i18n::Locale;

/// The current view/screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Orders,
    OrderDetail,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Views to return to, most recent last.
    pub history: Vec<View>,
    /// Display language.
    pub locale: Locale,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create a new application state.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    /// Switch views, remembering where we came from.
    pub fn navigate(&mut self, view: View) {
        if view != self.current_view {
            self.history.push(self.current_view);
            self.current_view = view;
        }
    }

    /// Return to the previous view. Leaving the root view quits.
    pub fn go_back(&mut self) {
        match self.history.pop() {
            Some(view) => self.current_view = view,
            None => self.should_quit = true,
        }
    }
}
