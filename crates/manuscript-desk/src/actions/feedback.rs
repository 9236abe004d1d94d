//! Feedback actions
//!
//! These are the only way the feedback state changes. Middleware create them
//! through the `Feedback` trait rather than by hand.

use std::time::Instant;

use crate::state::{ModalContent, Severity};

#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackAction {
    /// Show the loading indicator; `None` uses the configured default message
    ShowLoading(Option<String>),
    HideLoading,
    /// Append a toast; it expires one toast duration after `issued_at`
    Notify {
        message: String,
        severity: Severity,
        issued_at: Instant,
    },
    /// Show the modal, replacing any current one
    OpenModal(ModalContent),
    CloseModal,
    /// Scroll the modal body by a number of lines (negative scrolls up)
    ScrollModal(i32),
}
