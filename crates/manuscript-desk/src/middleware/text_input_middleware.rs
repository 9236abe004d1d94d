//! Text Input Translation Middleware
//!
//! Translates generic TextInput actions into view-specific actions using the
//! active view's `translate_text_input`, so they go through the full chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct TextInputMiddleware;

impl TextInputMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextInputMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TextInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::TextInput(input) = action {
            match state
                .active_view()
                .and_then(|view| view.translate_text_input(input.clone()))
            {
                Some(translated) => {
                    log::debug!("TextInputMiddleware: {:?} -> {:?}", input, translated);
                    dispatcher.dispatch(translated);
                }
                None => log::debug!("TextInput action not handled by active view: {:?}", input),
            }
            return false;
        }

        true
    }
}
