//! Loading indicator: a spinner and the current message in a small centered box

use manuscript_theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn render(message: &str, frame: usize, theme: &Theme, area: Rect, f: &mut Frame) {
    // Spinner, space, message, plus borders and padding
    let width = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(8)
        .min(area.width);
    let box_area = super::centered(area, width, 3);

    f.render_widget(Clear, box_area);

    let line = Line::from(vec![
        Span::styled(format!(" {} ", spinner(frame)), theme.key_hint()),
        Span::styled(message, theme.text()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .style(theme.panel_background());

    f.render_widget(Paragraph::new(line).block(block), box_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::views::test_support::{render_to_lines, screen_contains};

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner(0), spinner(SPINNER_FRAMES.len()));
    }

    #[test]
    fn test_loading_message_is_shown() {
        let mut state = AppState::default();
        state.feedback.show_loading("Expanding idea...");
        let lines = render_to_lines(&state, 80, 24);
        assert!(screen_contains(&lines, "Expanding idea..."));
    }
}
