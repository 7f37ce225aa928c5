//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::api::ApiClient;
use crate::config::Config;
use crate::controller::OrdersController;
use crate::error::Result;
use crate::events::EventHandler;
use crate::state::{Action, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Page state.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Remote operations.
    controller: OrdersController,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Build the client first so a bad base URL fails before the terminal is taken over
        let api = ApiClient::new(config.api.clone())?;
        tracing::info!(base_url = %api.base_url(), "using booking API");
        let controller = OrdersController::new(Arc::new(api));

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if config.ui.mouse_support {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let store = Store::new(action_tx, config.ui.locale);
        let event_handler = EventHandler::new(
            config.keybindings.clone(),
            Duration::from_millis(config.ui.tick_rate_ms),
        );

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            controller,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        self.store.dispatch(Action::LoadOrders)?;

        loop {
            self.event_handler.update_store_snapshot(&self.store);

            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store, &self.config.keybindings);
            })?;

            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.controller.handle(action, &mut self.store);
                    }
                }

                // Handle actions queued by the store and by request tasks
                Some(action) = self.action_rx.recv() => {
                    self.controller.handle(action, &mut self.store);
                }
            }

            if self.store.app.should_quit {
                tracing::info!("leaving orders page");
                break;
            }
        }

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
