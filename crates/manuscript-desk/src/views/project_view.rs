//! Project browser
//!
//! The base view: a table of projects on the left, the selected project's
//! details and chapters on the right, and key hints along the bottom.

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::views::{View, ViewId};
use manuscript_client::{Chapter, Project};
use manuscript_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct ProjectView;

impl ProjectView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProjectView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ProjectView {
    fn view_id(&self) -> ViewId {
        ViewId::Projects
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        !matches!(action, Action::TextInput(_) | Action::Confirmation(_))
    }
}

/// Hints shown in the footer, in display order
const FOOTER_COMMANDS: [(CommandId, &str); 8] = [
    (CommandId::NavigateNext, "next"),
    (CommandId::ProjectCreate, "new"),
    (CommandId::ProjectOpenDetail, "outline"),
    (CommandId::ExpandIdea, "idea"),
    (CommandId::ExportQueryLetter, "query"),
    (CommandId::ThemeToggle, "theme"),
    (CommandId::HelpToggle, "keys"),
    (CommandId::GlobalClose, "quit"),
];

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(state, chunks[0], f);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    if state.projects.projects.is_empty() {
        render_empty(state, columns[0], f);
    } else {
        render_table(state, columns[0], f);
    }
    render_detail(state, columns[1], f);

    f.render_widget(footer_line(state, theme), chunks[2]);
}

fn render_header(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let line = Line::from(vec![
        Span::styled(" Manuscript Desk ", theme.panel_title()),
        Span::styled(
            format!(
                "· {} projects · {} ",
                state.projects.projects.len(),
                state.config.server_url
            ),
            theme.muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_empty(state: &AppState, area: Rect, f: &mut Frame) {
    let message = if state.projects.loaded {
        "No projects yet. Press n to create one."
    } else {
        "Loading projects..."
    };
    let paragraph = Paragraph::new(message)
        .block(panel_block(" Projects ", &state.theme))
        .style(state.theme.muted())
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_table(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let header = Row::new(["Title", "Genre", "Status", "Progress"].map(Cell::from))
        .style(theme.section_header());

    let rows: Vec<Row> = state
        .projects
        .projects
        .iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(project.title.clone()),
                Cell::from(project.genre.clone()),
                Cell::from(project.status.clone()),
                Cell::from(progress_label(project)),
            ])
            .style(theme.text())
        })
        .collect();

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(20),
        Constraint::Percentage(15),
        Constraint::Percentage(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel_block(" Projects ", theme))
        .row_highlight_style(theme.list_selected())
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.projects.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn render_detail(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let Some(project) = state.projects.selected_project() else {
        f.render_widget(panel_block(" Details ", theme), area);
        return;
    };

    let mut lines = detail_lines(project, theme);
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Chapters", theme.section_header())));
    match state.projects.selected_chapters() {
        Some([]) => lines.push(Line::from(Span::styled("No chapters", theme.muted()))),
        Some(chapters) => lines.extend(chapters.iter().map(|c| chapter_line(c, theme))),
        None => lines.push(Line::from(Span::styled("Loading...", theme.muted()))),
    }

    let paragraph = Paragraph::new(lines)
        .block(panel_block(&format!(" {} ", project.title), theme))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn detail_lines<'a>(project: &'a Project, theme: &Theme) -> Vec<Line<'a>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), theme.key_description()),
            Span::styled(value, theme.text()),
        ])
    };

    let mut lines = Vec::new();
    if !project.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(project.subtitle.as_str(), theme.muted())));
    }
    if !project.author_name.is_empty() {
        lines.push(field("Author", project.author_name.clone()));
    }
    lines.push(field("Type", project.project_type.clone()));
    lines.push(field("Status", project.status.clone()));
    lines.push(field("Words", progress_label(project)));
    if !project.synopsis.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(project.synopsis.as_str(), theme.text())));
    }
    lines
}

fn chapter_line<'a>(chapter: &'a Chapter, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>3}. ", chapter.order), theme.muted()),
        Span::styled(chapter.title.as_str(), theme.text()),
        Span::styled(
            format!("  {} · {} words", chapter.status, chapter.word_count),
            theme.muted(),
        ),
    ])
}

/// "12,500 / 80,000 (16%)", or just the count without a target
fn progress_label(project: &Project) -> String {
    if project.target_word_count == 0 {
        group_thousands(project.word_count)
    } else {
        format!(
            "{} / {} ({:.0}%)",
            group_thousands(project.word_count),
            group_thousands(project.target_word_count),
            project.progress_percent
        )
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn panel_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_style(theme.panel_title())
        .border_style(theme.panel_border())
}

fn footer_line<'a>(state: &AppState, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (command, label) in FOOTER_COMMANDS {
        if let Some(hint) = state.keymap.compact_hint_for_command(command) {
            spans.push(Span::styled(hint, theme.key_hint()));
            spans.push(Span::styled(format!(" {}  ", label), theme.key_description()));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProjectChapters;
    use crate::views::test_support::{render_to_lines, screen_contains};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12500), "12,500");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_progress_label() {
        let project = Project {
            word_count: 12500,
            target_word_count: 80000,
            progress_percent: 15.6,
            ..Project::default()
        };
        assert_eq!(progress_label(&project), "12,500 / 80,000 (16%)");
        assert_eq!(
            progress_label(&Project {
                word_count: 300,
                ..Project::default()
            }),
            "300"
        );
    }

    #[test]
    fn test_renders_projects_and_selected_chapters() {
        let mut state = AppState::default();
        state.projects.replace(vec![
            Project {
                id: 1,
                title: "The Salt Road".into(),
                genre: "Fantasy".into(),
                ..Project::default()
            },
            Project {
                id: 2,
                title: "Glass Harbor".into(),
                ..Project::default()
            },
        ]);
        state.projects.chapters = Some(ProjectChapters {
            project_id: 1,
            chapters: vec![Chapter {
                id: 10,
                project_id: 1,
                title: "Low Tide".into(),
                order: 1,
                ..Chapter::default()
            }],
        });

        let lines = render_to_lines(&state, 120, 30);
        assert!(screen_contains(&lines, "The Salt Road"));
        assert!(screen_contains(&lines, "Glass Harbor"));
        assert!(screen_contains(&lines, "Low Tide"));
        assert!(screen_contains(&lines, "? keys"));
    }

    #[test]
    fn test_empty_list_before_first_load() {
        let lines = render_to_lines(&AppState::default(), 100, 20);
        assert!(screen_contains(&lines, "Loading projects..."));
    }
}
