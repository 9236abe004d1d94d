//! Feedback primitives
//!
//! `Feedback` is the surface callers use to report progress and results:
//! a loading indicator, self-expiring toasts and a single modal dialog.
//! The dispatcher implementation turns each call into a `FeedbackAction`,
//! so the state itself is only ever changed by the reducer.

use std::time::Instant;

use crate::actions::{Action, FeedbackAction};
use crate::dispatcher::Dispatcher;
use crate::state::{ModalContent, Severity};

pub trait Feedback {
    /// Show the loading indicator; `None` uses the configured default message
    fn show_loading(&self, message: Option<&str>);

    fn hide_loading(&self);

    /// Raise a toast that removes itself after the toast duration
    fn notify(&self, message: &str, severity: Severity);

    /// Show the modal, replacing any current one
    fn open_modal(&self, title: &str, body: &str, footer: &str);

    fn close_modal(&self);

    fn success(&self, message: &str) {
        self.notify(message, Severity::Success);
    }

    fn error(&self, message: &str) {
        self.notify(message, Severity::Error);
    }
}

impl Feedback for Dispatcher {
    fn show_loading(&self, message: Option<&str>) {
        self.dispatch(Action::Feedback(FeedbackAction::ShowLoading(
            message.map(str::to_string),
        )));
    }

    fn hide_loading(&self) {
        self.dispatch(Action::Feedback(FeedbackAction::HideLoading));
    }

    fn notify(&self, message: &str, severity: Severity) {
        self.dispatch(Action::Feedback(FeedbackAction::Notify {
            message: message.to_string(),
            severity,
            issued_at: Instant::now(),
        }));
    }

    fn open_modal(&self, title: &str, body: &str, footer: &str) {
        self.dispatch(Action::Feedback(FeedbackAction::OpenModal(
            ModalContent::new(title, body, footer),
        )));
    }

    fn close_modal(&self) {
        self.dispatch(Action::Feedback(FeedbackAction::CloseModal));
    }
}
