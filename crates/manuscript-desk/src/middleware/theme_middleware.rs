//! Theme Middleware
//!
//! Reads the stored theme once at startup and applies it. On toggle it
//! flips the current mode, applies it and persists it.

use manuscript_config::PreferenceStore;

use crate::actions::{Action, BootstrapAction, ThemeAction};
use crate::dispatcher::Dispatcher;
use crate::feedback::Feedback;
use crate::middleware::Middleware;
use crate::state::{AppState, Severity};

pub struct ThemeMiddleware {
    store: Box<dyn PreferenceStore>,
}

impl ThemeMiddleware {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self { store }
    }
}

impl Middleware for ThemeMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                let mode = self.store.load_theme();
                log::info!("ThemeMiddleware: stored theme is {}", mode);
                dispatcher.dispatch(Action::Theme(ThemeAction::Apply(mode)));
                true
            }

            Action::Theme(ThemeAction::Toggle) => {
                let mode = state.theme_mode.toggled();
                dispatcher.dispatch(Action::Theme(ThemeAction::Apply(mode)));
                if let Err(e) = self.store.save_theme(mode) {
                    log::error!("Failed to persist theme: {:#}", e);
                    dispatcher.notify("Could not save theme preference", Severity::Warning);
                }
                false
            }

            _ => true,
        }
    }
}
