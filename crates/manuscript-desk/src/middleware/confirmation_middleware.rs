//! Confirmation Middleware
//!
//! Handles Confirm by dispatching the pending intent's action, then closing
//! the popup.

use crate::actions::{Action, ConfirmationAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct ConfirmationMiddleware;

impl ConfirmationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfirmationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ConfirmationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Confirmation(ConfirmationAction::Confirm) = action else {
            return true;
        };

        match &state.confirmation {
            Some(intent) => {
                log::debug!("Confirmed: {:?}", intent);
                dispatcher.dispatch(Action::Confirmation(ConfirmationAction::Confirmed));
                dispatcher.dispatch(intent.action());
            }
            None => log::debug!("Confirm without a pending question"),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ProjectAction;
    use crate::middleware::test_support::channel_dispatcher;
    use crate::state::ConfirmationIntent;

    #[test]
    fn test_confirm_closes_popup_then_runs_intent() {
        let (dispatcher, rx) = channel_dispatcher();
        let mut state = AppState::default();
        state.confirmation = Some(ConfirmationIntent::DeleteProject {
            id: 4,
            title: "Draft One".into(),
        });

        let forwarded = ConfirmationMiddleware::new().handle(
            &Action::Confirmation(ConfirmationAction::Confirm),
            &state,
            &dispatcher,
        );
        assert!(!forwarded);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            actions[0],
            Action::Confirmation(ConfirmationAction::Confirmed)
        ));
        assert!(matches!(
            &actions[1],
            Action::Project(ProjectAction::Delete { id: 4, title }) if title == "Draft One"
        ));
    }

    #[test]
    fn test_confirm_without_question_does_nothing() {
        let (dispatcher, rx) = channel_dispatcher();
        ConfirmationMiddleware::new().handle(
            &Action::Confirmation(ConfirmationAction::Confirm),
            &AppState::default(),
            &dispatcher,
        );
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_cancel_passes_through_to_reducer() {
        let (dispatcher, _rx) = channel_dispatcher();
        assert!(ConfirmationMiddleware::new().handle(
            &Action::Confirmation(ConfirmationAction::Cancel),
            &AppState::default(),
            &dispatcher,
        ));
    }
}
