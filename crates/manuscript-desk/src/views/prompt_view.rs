//! Prompt View
//!
//! A one-line input popup for free text: a new project title, an idea to
//! expand, a research topic.

use crate::actions::{Action, PromptAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct PromptView;

impl PromptView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PromptView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for PromptView {
    fn view_id(&self) -> ViewId {
        ViewId::Prompt
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => PromptAction::Char(c),
            TextInputAction::Backspace => PromptAction::Backspace,
            TextInputAction::ClearLine => PromptAction::ClearLine,
            TextInputAction::Escape => PromptAction::Cancel,
            TextInputAction::Confirm => PromptAction::Submit,
        };
        Some(Action::Prompt(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Prompt(_) | Action::TextInput(_) | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let Some(prompt) = &state.prompt else {
        return;
    };
    let theme = &state.theme;

    f.render_widget(Block::default().style(theme.backdrop()), area);

    let popup_width = super::percent(area.width, 60).clamp(40.min(area.width), 80);
    let popup_area = super::centered(area, popup_width, 5);
    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", theme.key_hint().bold()),
        Span::styled(" submit  ", theme.muted()),
        Span::styled("Esc", theme.key_hint().bold()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", prompt.purpose.title()))
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer_hint)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 2,
    });

    let line = Line::from(vec![
        Span::styled(format!("{} ", prompt.purpose.label()), theme.key_description().bold()),
        Span::styled(prompt.value.as_str(), theme.text()),
        // Cursor
        Span::styled("▌", theme.key_hint()),
    ]);
    f.render_widget(Paragraph::new(line), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PromptPurpose;
    use crate::reducers::reduce;
    use crate::views::test_support::{render_to_lines, screen_contains};
    use manuscript_client::AiTool;

    #[test]
    fn test_escape_cancels_and_enter_submits() {
        let view = PromptView::new();
        assert!(matches!(
            view.translate_text_input(TextInputAction::Escape),
            Some(Action::Prompt(PromptAction::Cancel))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Confirm),
            Some(Action::Prompt(PromptAction::Submit))
        ));
    }

    #[test]
    fn test_renders_label_and_typed_text() {
        let mut state = reduce(
            AppState::default(),
            &Action::Prompt(PromptAction::Open(PromptPurpose::Tool(AiTool::ExpandIdea))),
        );
        for c in "a lighthouse".chars() {
            state = reduce(state, &Action::Prompt(PromptAction::Char(c)));
        }

        let lines = render_to_lines(&state, 100, 30);
        assert!(screen_contains(&lines, " Expand idea "));
        assert!(screen_contains(&lines, "Idea: a lighthouse▌"));
    }
}
