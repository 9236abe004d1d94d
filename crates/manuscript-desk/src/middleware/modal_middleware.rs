//! Modal Middleware
//!
//! Owns the modal's input subscriptions. While a modal is open it has focus:
//! - Esc or q closes it
//! - a left click outside the dialog (on the backdrop) closes it
//! - j/k and arrows scroll, s saves it as HTML
//!
//! With no modal open every key and click passes through untouched.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Position;

use crate::actions::{Action, FeedbackAction, GlobalAction, ToolAction};
use crate::dispatcher::Dispatcher;
use crate::feedback::Feedback;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::modal::modal_area;

pub struct ModalMiddleware;

impl ModalMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: &KeyEvent, dispatcher: &Dispatcher) -> bool {
        // Ctrl+C must still reach the keyboard middleware
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                log::debug!("ModalMiddleware: closing modal via key");
                dispatcher.close_modal();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                dispatcher.dispatch(Action::Feedback(FeedbackAction::ScrollModal(1)));
            }
            KeyCode::Char('k') | KeyCode::Up => {
                dispatcher.dispatch(Action::Feedback(FeedbackAction::ScrollModal(-1)));
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                dispatcher.dispatch(Action::Feedback(FeedbackAction::ScrollModal(10)));
            }
            KeyCode::PageUp => {
                dispatcher.dispatch(Action::Feedback(FeedbackAction::ScrollModal(-10)));
            }
            KeyCode::Char('s') => {
                dispatcher.dispatch(Action::Tools(ToolAction::SaveModal));
            }
            _ => {}
        }

        // The modal has focus; nothing leaks to the views beneath
        false
    }
}

impl Default for ModalMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ModalMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !state.feedback.is_modal_open() {
            return true;
        }

        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => self.handle_key(key, dispatcher),

            Action::Global(GlobalAction::MouseClicked { column, row }) => {
                let dialog = modal_area(state.terminal_area);
                if !dialog.contains(Position::new(*column, *row)) {
                    log::debug!("ModalMiddleware: backdrop click at ({}, {})", column, row);
                    dispatcher.close_modal();
                }
                false
            }

            _ => true,
        }
    }
}
