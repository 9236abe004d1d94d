use manuscript_theme::Theme;

use crate::actions::{Action, ConfirmationAction, GlobalAction, PromptAction, ThemeAction};
use crate::reducers::{confirmation_reducer, feedback_reducer, project_reducer, prompt_reducer};
use crate::state::AppState;
use crate::views::ViewId;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => return reduce_global(state, global),
        Action::Feedback(feedback) => {
            state.feedback = feedback_reducer::reduce_feedback(
                state.feedback,
                feedback,
                &state.config,
                state.terminal_area,
            );
        }
        Action::Theme(ThemeAction::Apply(mode)) => {
            log::info!("Applying {} theme", mode);
            state.theme_mode = *mode;
            state.theme = Theme::for_light_mode(mode.is_light());
        }
        Action::Project(project) => {
            state.projects = project_reducer::reduce_projects(state.projects, project);
        }
        Action::Prompt(prompt) => return prompt_reducer::reduce_prompt(state, prompt),
        Action::Confirmation(confirmation) => {
            return confirmation_reducer::reduce_confirmation(state, confirmation)
        }
        Action::Theme(ThemeAction::Toggle)
        | Action::Bootstrap(_)
        | Action::Tools(_)
        | Action::TextInput(_) => {
            // Side effects only - handled by middleware
        }
    }
    state
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top toggles it off
            let is_duplicate = state
                .active_view()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!("Popping view already on top: {:?}", new_view.view_id());
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::Close => {
            match state.active_view().map(|v| v.view_id()) {
                Some(ViewId::Prompt) => {
                    return prompt_reducer::reduce_prompt(state, &PromptAction::Cancel);
                }
                Some(ViewId::Confirmation) => {
                    return confirmation_reducer::reduce_confirmation(
                        state,
                        &ConfirmationAction::Cancel,
                    );
                }
                _ => {}
            }
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::Resized { width, height } => {
            state.terminal_area.width = *width;
            state.terminal_area.height = *height;
        }
        GlobalAction::Tick(now) => {
            state.feedback = feedback_reducer::reduce_tick(state.feedback, *now);
        }
        GlobalAction::KeyPressed(_) | GlobalAction::MouseClicked { .. } => {
            // Translated by middleware
        }
    }
    state
}
