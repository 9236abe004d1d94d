//! UI feedback state
//!
//! Loading indicator, toast stack and modal dialog. Invariants:
//! - at most one loading message (last writer wins)
//! - toasts coexist and each expires on its own deadline
//! - at most one modal; opening replaces the current content

use std::time::Instant;

/// Toast severity (affects presentation only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Content shown in the modal dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
    /// Shown on the bottom border; empty for none
    pub footer: String,
}

impl ModalContent {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        footer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            footer: footer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub content: ModalContent,
    /// First visible body line
    pub scroll: u16,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackState {
    pub loading: Option<String>,
    pub modal: Option<ModalState>,
    /// Oldest first
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
    /// Spinner animation frame, advanced on tick while loading
    pub spinner_frame: usize,
}

impl FeedbackState {
    pub fn show_loading(&mut self, message: impl Into<String>) {
        self.loading = Some(message.into());
    }

    pub fn hide_loading(&mut self) {
        self.loading = None;
        self.spinner_frame = 0;
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Append a toast and return its id
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        expires_at: Instant,
    ) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            expires_at,
        });
        id
    }

    /// Drop every toast whose deadline has passed; returns how many were removed
    pub fn expire_toasts(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before - self.toasts.len()
    }

    pub fn open_modal(&mut self, content: ModalContent) {
        self.modal = Some(ModalState { content, scroll: 0 });
    }

    /// Close the modal; returns false when none was open
    pub fn close_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Move the modal body by `delta` rows, staying within `0..=max`
    pub fn scroll_modal(&mut self, delta: i32, max: u16) {
        if let Some(modal) = self.modal.as_mut() {
            let next = (i32::from(modal.scroll) + delta).clamp(0, i32::from(max));
            modal.scroll = u16::try_from(next).unwrap_or(max);
        }
    }

    /// Whether anything on screen changes with time
    pub fn is_animating(&self) -> bool {
        self.loading.is_some() || !self.toasts.is_empty()
    }
}
