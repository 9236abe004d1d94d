//! Key Bindings Help View
//!
//! Lists every binding in the keymap, plus the keys the modal dialog handles
//! itself.

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{View, ViewId};
use manuscript_theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct HelpView;

impl HelpView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HelpView {
    fn view_id(&self) -> ViewId {
        ViewId::Help
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

    // Read-only: only closing, quitting and toggling itself apply
    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Global(_))
    }
}

const LEFT_PADDING: &str = "  ";

const MODAL_KEYS: [(&str, &str); 5] = [
    ("Esc/q", "Close dialog"),
    ("click", "Close dialog (outside it)"),
    ("j/k", "Scroll"),
    ("PgUp/PgDn", "Scroll a page"),
    ("s", "Save as HTML"),
];

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let panel_width = super::percent(area.width, 60);
    let panel_height = super::percent(area.height, 90);
    let panel_area = super::centered(area, panel_width, panel_height);

    f.render_widget(Block::default().style(theme.backdrop()), area);
    f.render_widget(Clear, panel_area);

    let footer_hint = Line::from(vec![
        Span::styled(" ?", theme.key_hint().bold()),
        Span::styled("/", theme.muted()),
        Span::styled("Esc", theme.key_hint().bold()),
        Span::styled(" close ", theme.muted()),
    ]);

    let block = Block::default()
        .title(" Key Bindings ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer_hint);

    let paragraph = Paragraph::new(content_lines(state, theme))
        .block(block)
        .style(theme.panel_background());

    f.render_widget(paragraph, panel_area);
}

fn content_lines<'a>(state: &'a AppState, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::default()];

    let (answers, commands): (Vec<_>, Vec<_>) = state
        .keymap
        .bindings()
        .partition(|binding| binding.command.answers_confirmation());

    section(&mut lines, "Projects & tools", theme);
    for binding in commands {
        lines.push(binding_line(
            binding.hint.clone(),
            binding.command.title(),
            theme,
        ));
    }
    lines.push(Line::default());

    section(&mut lines, "Confirmation", theme);
    for binding in answers {
        lines.push(binding_line(
            binding.hint.clone(),
            binding.command.title(),
            theme,
        ));
    }
    lines.push(Line::default());

    section(&mut lines, "Dialog", theme);
    for (keys, description) in MODAL_KEYS {
        lines.push(binding_line(keys.to_string(), description, theme));
    }
    lines
}

fn section(lines: &mut Vec<Line<'_>>, title: &'static str, theme: &Theme) {
    lines.push(Line::from(vec![
        Span::raw(LEFT_PADDING),
        Span::styled(title, theme.section_header()),
    ]));
}

fn binding_line<'a>(keys: String, description: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::raw(LEFT_PADDING),
        Span::styled(format!("{:<12}", keys), theme.key_hint()),
        Span::styled(description, theme.key_description()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_id::CommandId;
    use crate::reducers::reduce;
    use crate::views::test_support::{render_to_lines, screen_contains};

    #[test]
    fn test_lists_keymap_and_dialog_keys() {
        let state = reduce(AppState::default(), &CommandId::HelpToggle.to_action());
        let lines = render_to_lines(&state, 120, 50);
        assert!(screen_contains(&lines, "Key Bindings"));
        assert!(screen_contains(&lines, "Toggle dark/light theme"));
        assert!(screen_contains(&lines, "Save as HTML"));
        assert!(screen_contains(&lines, "Confirmation"));
    }

    #[test]
    fn test_gates_non_global_actions() {
        let view = HelpView::new();
        assert!(view.accepts_action(&CommandId::GlobalClose.to_action()));
        assert!(!view.accepts_action(&CommandId::ProjectDelete.to_action()));
    }
}
