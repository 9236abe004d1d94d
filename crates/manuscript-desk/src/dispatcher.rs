//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched here go back through the full middleware chain (via the
//! action channel feeding the background worker). This is how a request
//! middleware reports results: it dispatches feedback and data actions from
//! its async tasks, and they reach the reducer like any other action.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Sends actions into the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action; it re-enters the middleware chain from the beginning
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
