//! Prompt Middleware
//!
//! Handles Submit by turning the prompt's text into the action its purpose
//! asks for, then closing the prompt.

use crate::actions::{Action, ProjectAction, PromptAction, PromptPurpose, ToolAction};
use crate::dispatcher::Dispatcher;
use crate::feedback::Feedback;
use crate::middleware::Middleware;
use crate::state::{AppState, Severity};

pub struct PromptMiddleware;

impl PromptMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PromptMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for PromptMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Prompt(PromptAction::Submit) = action else {
            return true;
        };

        let Some(prompt) = &state.prompt else {
            return false;
        };

        let Some(text) = prompt.submission() else {
            dispatcher.notify(
                &format!("{} must not be empty", prompt.purpose.label().trim_end_matches(':')),
                Severity::Warning,
            );
            return false;
        };

        let follow_up = match prompt.purpose {
            PromptPurpose::NewProject => Action::Project(ProjectAction::Create(text.to_string())),
            PromptPurpose::Tool(tool) => Action::Tools(ToolAction::Run {
                tool,
                input: text.to_string(),
            }),
        };

        log::debug!("Prompt submitted for {:?}", prompt.purpose);
        dispatcher.dispatch(Action::Prompt(PromptAction::Submitted));
        dispatcher.dispatch(follow_up);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FeedbackAction;
    use crate::middleware::test_support::channel_dispatcher;
    use crate::state::PromptState;
    use manuscript_client::AiTool;

    fn state_with_prompt(purpose: PromptPurpose, value: &str) -> AppState {
        let mut state = AppState::default();
        state.prompt = Some(PromptState {
            purpose,
            value: value.to_string(),
        });
        state
    }

    #[test]
    fn test_submit_new_project_creates_trimmed_title() {
        let (dispatcher, rx) = channel_dispatcher();
        let state = state_with_prompt(PromptPurpose::NewProject, "  Draft One ");

        PromptMiddleware::new().handle(&Action::Prompt(PromptAction::Submit), &state, &dispatcher);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(actions[0], Action::Prompt(PromptAction::Submitted)));
        assert!(matches!(
            &actions[1],
            Action::Project(ProjectAction::Create(title)) if title == "Draft One"
        ));
    }

    #[test]
    fn test_submit_tool_prompt_runs_tool() {
        let (dispatcher, rx) = channel_dispatcher();
        let state = state_with_prompt(PromptPurpose::Tool(AiTool::Research), "tide pools");

        PromptMiddleware::new().handle(&Action::Prompt(PromptAction::Submit), &state, &dispatcher);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            &actions[1],
            Action::Tools(ToolAction::Run { tool: AiTool::Research, input }) if input == "tide pools"
        ));
    }

    #[test]
    fn test_empty_submit_keeps_prompt_open() {
        let (dispatcher, rx) = channel_dispatcher();
        let state = state_with_prompt(PromptPurpose::NewProject, "   ");

        PromptMiddleware::new().handle(&Action::Prompt(PromptAction::Submit), &state, &dispatcher);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            &actions[0],
            Action::Feedback(FeedbackAction::Notify { message, .. }) if message == "Title must not be empty"
        ));
    }
}
