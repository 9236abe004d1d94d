//! Prompt Reducer
//!
//! Handles the prompt state together with its view on the stack.

use crate::actions::PromptAction;
use crate::state::{AppState, PromptState};
use crate::views::{PromptView, ViewId};

pub fn reduce_prompt(mut state: AppState, action: &PromptAction) -> AppState {
    match action {
        PromptAction::Open(purpose) => {
            state.prompt = Some(PromptState::new(*purpose));
            if state.active_view().map(|v| v.view_id()) != Some(ViewId::Prompt) {
                state.view_stack.push(Box::new(PromptView::new()));
            }
            log::debug!("Opened prompt: {:?}", purpose);
        }
        PromptAction::Cancel | PromptAction::Submitted => {
            state.prompt = None;
            if state.active_view().map(|v| v.view_id()) == Some(ViewId::Prompt) {
                state.view_stack.pop();
            }
        }
        PromptAction::Submit => {
            // Handled by middleware - should not reach reducer
        }
        PromptAction::Char(c) => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.value.push(*c);
            }
        }
        PromptAction::Backspace => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.value.pop();
            }
        }
        PromptAction::ClearLine => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.value.clear();
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PromptPurpose;

    #[test]
    fn test_open_type_and_cancel() {
        let state = reduce_prompt(
            AppState::default(),
            &PromptAction::Open(PromptPurpose::NewProject),
        );
        assert_eq!(state.view_stack.len(), 2);

        let state = reduce_prompt(state, &PromptAction::Char('H'));
        let state = reduce_prompt(state, &PromptAction::Char('i'));
        let state = reduce_prompt(state, &PromptAction::Backspace);
        assert_eq!(state.prompt.as_ref().map(|p| p.value.as_str()), Some("H"));

        let state = reduce_prompt(state, &PromptAction::Cancel);
        assert!(state.prompt.is_none());
        assert_eq!(state.view_stack.len(), 1);
    }
}
