//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering and user input only
//! - Background thread runs the middleware chain (HTTP calls, file I/O)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware
//! chain, so `Bootstrap::Start -> Project::Load -> Project::Loaded` flows
//! through every middleware in order. Middleware only sees a snapshot of the
//! state; anything that depends on the reduced result (such as
//! `Project::Selected`) is sent back by the main thread after reducing.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// How often time-based feedback (toast expiry, spinner) is refreshed
const TICK_RATE: Duration = Duration::from_millis(100);

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create the Dispatcher handed to middleware
/// - `result_tx`: sends non-consumed actions to the main thread for reducers
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain, in execution order
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);
    let mut last_tick = Instant::now();

    loop {
        match action_rx.recv_timeout(Duration::from_millis(10)) {
            Ok(action) => {
                if matches!(action, Action::Global(GlobalAction::Quit)) {
                    log::info!("Background worker received shutdown signal");
                    if result_tx.send(action).is_err() {
                        log::error!("Failed to send quit action to main thread");
                    }
                    break;
                }

                let current_state = match state.read() {
                    Ok(s) => s.clone(),
                    Err(e) => {
                        log::error!("Failed to read shared state: {}", e);
                        continue;
                    }
                };

                let should_forward = middleware
                    .iter_mut()
                    .all(|mw| mw.handle(&action, &current_state, &dispatcher));

                if should_forward && result_tx.send(action).is_err() {
                    log::error!("Result channel disconnected, shutting down");
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            let animating = state
                .read()
                .map(|s| s.feedback.is_animating())
                .unwrap_or(false);
            if animating
                && result_tx
                    .send(Action::Global(GlobalAction::Tick(last_tick)))
                    .is_err()
            {
                log::error!("Result channel disconnected during tick");
                break;
            }
        }
    }

    log::info!("Background worker stopped");
}
