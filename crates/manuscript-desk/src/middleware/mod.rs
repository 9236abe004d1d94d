use manuscript_client::ApiError;
use std::future::Future;
use tokio::runtime::Runtime;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::feedback::Feedback;
use crate::state::AppState;

pub mod bootstrap_middleware;
pub mod confirmation_middleware;
pub mod export_middleware;
pub mod keyboard_middleware;
pub mod modal_middleware;
pub mod project_middleware;
pub mod prompt_middleware;
pub mod text_input_middleware;
pub mod theme_middleware;
pub mod tools_middleware;

#[cfg(test)]
pub(crate) mod test_support;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so it can perform blocking operations
/// (file I/O) without affecting the UI render loop. Network calls go to a tokio
/// runtime and report back through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

/// Run a gateway request with loading feedback around it
///
/// Loading is shown before the request starts and hidden once it settles,
/// on the success and the failure path alike. Failures become error toasts
/// carrying the gateway's message.
pub(crate) fn spawn_request<T, Fut, F>(
    runtime: &Runtime,
    dispatcher: &Dispatcher,
    loading: Option<&str>,
    request: Fut,
    on_success: F,
) where
    T: Send + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    F: FnOnce(T, &Dispatcher) + Send + 'static,
{
    dispatcher.show_loading(loading);
    let dispatcher = dispatcher.clone();

    runtime.spawn(async move {
        let result = request.await;
        dispatcher.hide_loading();
        match result {
            Ok(value) => on_success(value, &dispatcher),
            Err(e) => {
                log::error!("Request failed: {}", e);
                dispatcher.error(e.message());
            }
        }
    });
}
