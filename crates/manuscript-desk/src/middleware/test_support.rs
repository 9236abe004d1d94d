//! Shared helpers for middleware tests

use async_trait::async_trait;
use manuscript_client::{ApiError, ManuscriptApi, Method, RequestGateway};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::actions::{Action, FeedbackAction};
use crate::dispatcher::Dispatcher;

pub type RecordedCall = (String, Method, Option<Value>);

/// Gateway double replaying canned results and recording calls
#[derive(Default)]
pub struct MockGateway {
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGateway {
    pub fn replying(responses: Vec<Result<Value, ApiError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestGateway for MockGateway {
    async fn call(&self, url: &str, method: Method, body: Option<Value>) -> Result<Value, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), method, body));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

pub fn api_with(mock: &Arc<MockGateway>) -> ManuscriptApi {
    ManuscriptApi::new(mock.clone())
}

pub fn channel_dispatcher() -> (Dispatcher, Receiver<Action>) {
    let (tx, rx) = mpsc::channel();
    (Dispatcher::new(tx), rx)
}

/// Collect dispatched actions until `hides` HideLoading actions were seen,
/// plus whatever the request dispatched right after settling
pub fn collect_until_settled(rx: &Receiver<Action>, hides: usize) -> Vec<Action> {
    let mut actions = Vec::new();
    let mut seen = 0;
    while seen < hides {
        let action = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("request did not settle in time");
        if matches!(action, Action::Feedback(FeedbackAction::HideLoading)) {
            seen += 1;
        }
        actions.push(action);
    }
    while let Ok(action) = rx.recv_timeout(Duration::from_millis(200)) {
        actions.push(action);
    }
    actions
}

/// Positions of ShowLoading/HideLoading in `actions`
pub fn loading_pairs(actions: &[Action]) -> (Vec<usize>, Vec<usize>) {
    let mut shows = Vec::new();
    let mut hides = Vec::new();
    for (i, action) in actions.iter().enumerate() {
        match action {
            Action::Feedback(FeedbackAction::ShowLoading(_)) => shows.push(i),
            Action::Feedback(FeedbackAction::HideLoading) => hides.push(i),
            _ => {}
        }
    }
    (shows, hides)
}

/// Messages of all error toasts in `actions`
pub fn error_toasts(actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::Feedback(FeedbackAction::Notify {
                message,
                severity: crate::state::Severity::Error,
                ..
            }) => Some(message.clone()),
            _ => None,
        })
        .collect()
}
