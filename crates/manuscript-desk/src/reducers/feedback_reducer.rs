//! Feedback Reducer

use manuscript_config::AppConfig;
use ratatui::layout::Rect;
use std::time::Instant;

use crate::actions::FeedbackAction;
use crate::state::FeedbackState;
use crate::views::modal;

/// `terminal_area` bounds modal scrolling to the body's wrapped height
pub fn reduce_feedback(
    mut state: FeedbackState,
    action: &FeedbackAction,
    config: &AppConfig,
    terminal_area: Rect,
) -> FeedbackState {
    match action {
        FeedbackAction::ShowLoading(message) => {
            let message = message
                .clone()
                .unwrap_or_else(|| config.loading_message.clone());
            state.show_loading(message);
        }
        FeedbackAction::HideLoading => state.hide_loading(),
        FeedbackAction::Notify {
            message,
            severity,
            issued_at,
        } => {
            let expires_at = *issued_at + config.toast_duration();
            state.notify(message.clone(), *severity, expires_at);
        }
        FeedbackAction::OpenModal(content) => state.open_modal(content.clone()),
        FeedbackAction::CloseModal => {
            if !state.close_modal() {
                log::debug!("CloseModal with no modal open");
            }
        }
        FeedbackAction::ScrollModal(delta) => {
            let max = state
                .modal
                .as_ref()
                .map(|m| modal::max_scroll(&m.content.body, terminal_area))
                .unwrap_or(0);
            state.scroll_modal(*delta, max);
        }
    }
    state
}

/// Expire toasts and advance the spinner
pub fn reduce_tick(mut state: FeedbackState, now: Instant) -> FeedbackState {
    let expired = state.expire_toasts(now);
    if expired > 0 {
        log::debug!("Expired {} toast(s)", expired);
    }
    if state.is_loading() {
        state.spinner_frame = state.spinner_frame.wrapping_add(1);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ModalContent, Severity};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_show_loading_defaults_to_configured_message() {
        let config = AppConfig::default();
        let state = reduce_feedback(
            FeedbackState::default(),
            &FeedbackAction::ShowLoading(None),
            &config,
            Rect::default(),
        );
        assert_eq!(state.loading.as_deref(), Some("Processing..."));
    }

    #[test]
    fn test_toast_expires_after_configured_duration() {
        let config = AppConfig::default();
        let issued_at = Instant::now();
        let mut state = reduce_feedback(
            FeedbackState::default(),
            &FeedbackAction::Notify {
                message: "Project created".into(),
                severity: Severity::Success,
                issued_at,
            },
            &config,
            Rect::default(),
        );
        state = reduce_feedback(
            state,
            &FeedbackAction::Notify {
                message: "Saved".into(),
                severity: Severity::Info,
                issued_at: issued_at + Duration::from_millis(1000),
            },
            &config,
            Rect::default(),
        );

        state = reduce_tick(state, issued_at + Duration::from_millis(3999));
        assert_eq!(state.toasts.len(), 2);

        state = reduce_tick(state, issued_at + Duration::from_millis(4000));
        let remaining: Vec<&str> = state.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["Saved"]);

        state = reduce_tick(state, issued_at + Duration::from_millis(5000));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_close_modal_when_closed_leaves_state_untouched() {
        let config = AppConfig::default();
        let state = reduce_feedback(
            FeedbackState::default(),
            &FeedbackAction::CloseModal,
            &config,
            Rect::default(),
        );
        assert!(state.modal.is_none());

        let state = reduce_feedback(
            state,
            &FeedbackAction::OpenModal(ModalContent::new("A", "b", "")),
            &config,
            Rect::default(),
        );
        let state = reduce_feedback(state, &FeedbackAction::CloseModal, &config, Rect::default());
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_single_paragraph_modal_scrolls_through_wrapped_rows() {
        let config = AppConfig::default();
        let area = Rect::new(0, 0, 100, 40);
        let state = reduce_feedback(
            FeedbackState::default(),
            &FeedbackAction::OpenModal(ModalContent::new("Outline", "word ".repeat(2000), "")),
            &config,
            area,
        );

        let state = reduce_feedback(state, &FeedbackAction::ScrollModal(10), &config, area);
        assert_eq!(state.modal.as_ref().unwrap().scroll, 10);

        let max = modal::max_scroll(&"word ".repeat(2000), area);
        assert!(max > 100);
        let state = reduce_feedback(state, &FeedbackAction::ScrollModal(10_000), &config, area);
        assert_eq!(state.modal.as_ref().unwrap().scroll, max);
    }

    #[test]
    fn test_spinner_only_advances_while_loading() {
        let now = Instant::now();
        let state = reduce_tick(FeedbackState::default(), now);
        assert_eq!(state.spinner_frame, 0);

        let mut loading = FeedbackState::default();
        loading.show_loading("Processing...");
        let loading = reduce_tick(reduce_tick(loading, now), now);
        assert_eq!(loading.spinner_frame, 2);
    }
}
