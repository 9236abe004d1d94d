//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! Runs after the modal middleware, so it only sees keys while no modal is open.
//!
//! ## Layer 1: Priority keys
//! Ctrl+C always quits. Esc cancels text input or closes a floating view;
//! on the base view it does nothing.
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT receive printable keys as text.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::command_id::CommandId;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else if state.view_stack.len() > 1 {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            } else {
                log::debug!("Layer 1: Esc on base view - ignored");
            }
            return false;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    return false;
                }
                KeyCode::Char(c)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
                    return false;
                }
                KeyCode::Backspace => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
                    return false;
                }
                KeyCode::Enter => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
                    return false;
                }
                // Other keys fall through to the keymap (Ctrl combinations)
                _ => {}
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        for cmd_id in state.keymap.match_key(&key) {
            if matches!(cmd_id, CommandId::NavigateNext | CommandId::NavigatePrevious)
                && !capabilities.supports_item_navigation()
            {
                log::debug!("Layer 3: {:?} needs item navigation", cmd_id);
                continue;
            }
            let action = cmd_id.to_action();
            match view {
                Some(view) if !view.accepts_action(&action) => {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}",
                        cmd_id,
                        view.view_id()
                    );
                }
                _ => {
                    log::debug!("Layer 3: Command {:?} dispatched", cmd_id);
                    dispatcher.dispatch(action);
                    return false;
                }
            }
        }

        // Unhandled keys are consumed (not passed through)
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                log::debug!("KeyboardMiddleware: key={:?}", key);
                self.handle_key(*key, state, dispatcher)
            }
            // Clicks outside a modal have no meaning yet
            Action::Global(GlobalAction::MouseClicked { .. }) => false,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ProjectAction, PromptAction, PromptPurpose, ThemeAction};
    use crate::middleware::test_support::channel_dispatcher;
    use crate::reducers::reduce;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers)))
    }

    fn dispatched(state: &AppState, action: Action) -> Vec<Action> {
        let (dispatcher, rx) = channel_dispatcher();
        KeyboardMiddleware::new().handle(&action, state, &dispatcher);
        rx.try_iter().collect()
    }

    #[test]
    fn test_escape_on_base_view_does_nothing() {
        let actions = dispatched(
            &AppState::default(),
            press(KeyCode::Esc, KeyModifiers::NONE),
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn test_keymap_routes_on_project_view() {
        let actions = dispatched(
            &AppState::default(),
            press(KeyCode::Char('t'), KeyModifiers::NONE),
        );
        assert!(matches!(actions[..], [Action::Theme(ThemeAction::Toggle)]));

        let actions = dispatched(
            &AppState::default(),
            press(KeyCode::Char('j'), KeyModifiers::NONE),
        );
        assert!(matches!(
            actions[..],
            [Action::Project(ProjectAction::SelectNext)]
        ));
    }

    #[test]
    fn test_prompt_receives_text_instead_of_commands() {
        let state = reduce(
            AppState::default(),
            &Action::Prompt(PromptAction::Open(PromptPurpose::NewProject)),
        );

        let actions = dispatched(&state, press(KeyCode::Char('t'), KeyModifiers::NONE));
        assert!(matches!(
            actions[..],
            [Action::TextInput(TextInputAction::Char('t'))]
        ));

        let actions = dispatched(&state, press(KeyCode::Esc, KeyModifiers::NONE));
        assert!(matches!(
            actions[..],
            [Action::TextInput(TextInputAction::Escape)]
        ));
    }

    #[test]
    fn test_navigation_needs_item_navigation() {
        let state = reduce(
            AppState::default(),
            &crate::keymap::CommandId::HelpToggle.to_action(),
        );
        let actions = dispatched(&state, press(KeyCode::Down, KeyModifiers::NONE));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_confirmation_keys_answer_the_popup() {
        use crate::actions::ConfirmationAction;
        use crate::state::ConfirmationIntent;

        let state = reduce(
            AppState::default(),
            &Action::Confirmation(ConfirmationAction::Show(ConfirmationIntent::DeleteProject {
                id: 1,
                title: "Draft One".into(),
            })),
        );

        let actions = dispatched(&state, press(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(
            actions[..],
            [Action::Confirmation(ConfirmationAction::Confirm)]
        ));
        let actions = dispatched(&state, press(KeyCode::Char('n'), KeyModifiers::NONE));
        assert!(matches!(
            actions[..],
            [Action::Confirmation(ConfirmationAction::Cancel)]
        ));
        let actions = dispatched(&state, press(KeyCode::Char('d'), KeyModifiers::NONE));
        assert!(actions.is_empty());

        // Without the popup, y means nothing and Enter opens the outline
        let actions = dispatched(
            &AppState::default(),
            press(KeyCode::Char('y'), KeyModifiers::NONE),
        );
        assert!(actions.is_empty());
        let actions = dispatched(
            &AppState::default(),
            press(KeyCode::Enter, KeyModifiers::NONE),
        );
        assert!(matches!(
            actions[..],
            [Action::Project(ProjectAction::OpenDetail)]
        ));
    }

    #[test]
    fn test_help_view_gates_project_commands() {
        let state = reduce(
            AppState::default(),
            &crate::keymap::CommandId::HelpToggle.to_action(),
        );
        let actions = dispatched(&state, press(KeyCode::Char('d'), KeyModifiers::NONE));
        assert!(actions.is_empty());
    }
}
