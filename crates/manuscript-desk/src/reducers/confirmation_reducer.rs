//! Confirmation Reducer
//!
//! Keeps the pending question and the confirmation view on the stack in step.

use crate::actions::ConfirmationAction;
use crate::state::AppState;
use crate::views::{ConfirmationView, ViewId};

pub fn reduce_confirmation(mut state: AppState, action: &ConfirmationAction) -> AppState {
    match action {
        ConfirmationAction::Show(intent) => {
            state.confirmation = Some(intent.clone());
            if state.active_view().map(|v| v.view_id()) != Some(ViewId::Confirmation) {
                state.view_stack.push(Box::new(ConfirmationView::new()));
            }
            log::debug!("Asking for confirmation: {:?}", intent);
        }
        ConfirmationAction::Cancel | ConfirmationAction::Confirmed => {
            state.confirmation = None;
            if state.active_view().map(|v| v.view_id()) == Some(ViewId::Confirmation) {
                state.view_stack.pop();
            }
        }
        ConfirmationAction::Confirm => {
            // Handled by middleware - should not reach reducer
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfirmationIntent;

    fn delete_intent() -> ConfirmationIntent {
        ConfirmationIntent::DeleteProject {
            id: 3,
            title: "Draft One".into(),
        }
    }

    #[test]
    fn test_show_pushes_view_once() {
        let show = ConfirmationAction::Show(delete_intent());
        let state = reduce_confirmation(AppState::default(), &show);
        let state = reduce_confirmation(state, &show);
        assert_eq!(state.view_stack.len(), 2);
        assert_eq!(state.confirmation, Some(delete_intent()));
    }

    #[test]
    fn test_cancel_and_confirmed_close_the_popup() {
        for close in [ConfirmationAction::Cancel, ConfirmationAction::Confirmed] {
            let state = reduce_confirmation(
                AppState::default(),
                &ConfirmationAction::Show(delete_intent()),
            );
            let state = reduce_confirmation(state, &close);
            assert!(state.confirmation.is_none());
            assert_eq!(state.view_stack.len(), 1);
        }
    }
}
