//! Confirmation View
//!
//! A small floating yes/no question shown before destructive actions.

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct ConfirmationView;

impl ConfirmationView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfirmationView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ConfirmationView {
    fn view_id(&self) -> ViewId {
        ViewId::Confirmation
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Confirmation(_) | Action::Global(_))
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let Some(intent) = &state.confirmation else {
        return;
    };
    let theme = &state.theme;

    f.render_widget(Block::default().style(theme.backdrop()), area);

    let popup_width = super::percent(area.width, 50).clamp(40.min(area.width), 70);
    let popup_area = super::centered(area, popup_width, 6);
    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" y", theme.key_hint().bold()),
        Span::styled(format!(" {}  ", intent.verb()), theme.muted()),
        Span::styled("n", theme.key_hint().bold()),
        Span::styled("/", theme.muted()),
        Span::styled("Esc", theme.key_hint().bold()),
        Span::styled(" keep ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", intent.title()))
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer_hint)
        .border_style(theme.warning())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let question = Paragraph::new(intent.question())
        .style(theme.text())
        .wrap(Wrap { trim: true });
    f.render_widget(question, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ConfirmationAction;
    use crate::reducers::reduce;
    use crate::state::ConfirmationIntent;
    use crate::views::test_support::{render_to_lines, screen_contains};

    #[test]
    fn test_renders_question_and_hints() {
        let state = reduce(
            AppState::default(),
            &Action::Confirmation(ConfirmationAction::Show(ConfirmationIntent::DeleteProject {
                id: 1,
                title: "The Salt Road".into(),
            })),
        );

        let lines = render_to_lines(&state, 100, 30);
        assert!(screen_contains(&lines, " Delete project "));
        assert!(screen_contains(&lines, "Delete \"The Salt Road\" with all its chapters?"));
        assert!(screen_contains(&lines, "y delete  n/Esc keep"));
    }

    #[test]
    fn test_only_answers_and_global_actions_pass() {
        let view = ConfirmationView::new();
        assert!(view.accepts_action(&Action::Confirmation(ConfirmationAction::Confirm)));
        assert!(!view.accepts_action(&Action::Project(
            crate::actions::ProjectAction::OpenDetail
        )));
    }
}
