//! Bootstrap Middleware
//!
//! Logs the startup sequence and greets the user once the worker is running.
//! Theme and project loading react to `BootstrapAction::Start` in their own
//! middleware.

use crate::actions::{Action, BootstrapAction};
use crate::dispatcher::Dispatcher;
use crate::feedback::Feedback;
use crate::middleware::Middleware;
use crate::state::{AppState, Severity};

pub struct BootstrapMiddleware {
    server_url: String,
}

impl BootstrapMiddleware {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }
}

impl Middleware for BootstrapMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Bootstrap(BootstrapAction::Start) = action {
            log::info!("BootstrapMiddleware: starting against {}", self.server_url);
            dispatcher.notify(
                &format!("Server {} - press ? for keys", self.server_url),
                Severity::Info,
            );
        }
        true
    }
}
