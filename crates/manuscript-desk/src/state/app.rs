//! Application State

use manuscript_config::{AppConfig, ThemeMode};
use manuscript_theme::Theme;
use ratatui::layout::Rect;

use crate::keymap::{default_keymap, Keymap};
use crate::views::{ProjectView, View};

use super::{ConfirmationIntent, FeedbackState, ProjectsState, PromptState};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub feedback: FeedbackState,
    pub projects: ProjectsState,
    /// Prompt input (present only while the prompt view is shown)
    pub prompt: Option<PromptState>,
    /// Pending yes/no question (present only while the confirmation view is shown)
    pub confirmation: Option<ConfirmationIntent>,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub keymap: Keymap,
    pub config: AppConfig,
    /// Last known terminal size, used for mouse hit-testing
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("feedback", &self.feedback)
            .field("projects", &format!("{} projects", self.projects.projects.len()))
            .field("prompt", &self.prompt)
            .field("confirmation", &self.confirmation)
            .field("theme_mode", &self.theme_mode)
            .field("config", &self.config)
            .field("terminal_area", &self.terminal_area)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            feedback: self.feedback.clone(),
            projects: self.projects.clone(),
            prompt: self.prompt.clone(),
            confirmation: self.confirmation.clone(),
            theme_mode: self.theme_mode,
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
            config: self.config.clone(),
            terminal_area: self.terminal_area,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(ProjectView::new())],
            feedback: FeedbackState::default(),
            projects: ProjectsState::default(),
            prompt: None,
            confirmation: None,
            theme_mode: ThemeMode::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            config: AppConfig::default(),
            terminal_area: Rect::default(),
        }
    }
}
