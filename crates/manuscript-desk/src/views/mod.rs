use crate::actions::{Action, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, widgets::Block, Frame};

pub mod confirmation_view;
pub mod help_view;
pub mod loading;
pub mod modal;
pub mod project_view;
pub mod prompt_view;
pub mod toasts;

pub use confirmation_view::ConfirmationView;
pub use help_view::HelpView;
pub use project_view::ProjectView;
pub use prompt_view::PromptView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Projects,
    Help,
    Prompt,
    Confirmation,
}

/// View trait - defines the interface that all views must implement
///
/// Views live on the view stack as `Box<dyn View>`, so the trait must stay
/// object-safe. They travel inside actions between threads (`Send`) and sit in
/// the `RwLock`-shared state the worker reads (`Sync`).
pub trait View: std::fmt::Debug + Send + Sync {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic text input action to this view's specific action.
    ///
    /// The default implementation returns None, meaning the view has no
    /// text field.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Whether a keymap command may run while this view is on top
    fn accepts_action(&self, _action: &Action) -> bool {
        true
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views render bottom-up, then the feedback overlays in a fixed order:
/// modal, loading indicator, toasts. Toasts stay readable over everything.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(state.theme.background()), area);

    for view in &state.view_stack {
        view.render(state, area, f);
    }

    if let Some(modal) = &state.feedback.modal {
        modal::render(modal, &state.theme, area, f);
    }
    if let Some(message) = &state.feedback.loading {
        loading::render(message, state.feedback.spinner_frame, &state.theme, area, f);
    }
    toasts::render(&state.feedback.toasts, &state.theme, area, f);
}

/// `pct` percent of `len`, computed wide so large terminals cannot overflow
pub(crate) fn percent(len: u16, pct: u16) -> u16 {
    let scaled = u32::from(len) * u32::from(pct) / 100;
    u16::try_from(scaled).unwrap_or(u16::MAX)
}

/// Centered rectangle of the given size, clamped to `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    /// Render the whole UI into a test buffer and return it as text lines
    pub fn render_to_lines(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render(state, f.area(), f))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn screen_contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }
}
