//! Toast stack
//!
//! Toasts stack upward from the bottom-right corner, newest at the bottom.
//! Each one is a bordered box colored by severity; long messages wrap onto
//! up to four rows.

use manuscript_theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::state::{Severity, Toast};

const MAX_TOAST_LINES: u16 = 4;
const MAX_TOAST_WIDTH: u16 = 60;
const MARGIN: u16 = 1;

fn severity_style(severity: Severity, theme: &Theme) -> Style {
    match severity {
        Severity::Success => theme.success(),
        Severity::Error => theme.error(),
        Severity::Warning => theme.warning(),
        Severity::Info => theme.info(),
    }
}

pub fn render(toasts: &[Toast], theme: &Theme, area: Rect, f: &mut Frame) {
    let mut bottom = area.y + area.height.saturating_sub(MARGIN);

    for toast in toasts.iter().rev() {
        // Icon, space, message, plus borders and padding
        let message_width = u16::try_from(toast.message.chars().count()).unwrap_or(u16::MAX);
        let width = message_width
            .saturating_add(6)
            .min(MAX_TOAST_WIDTH)
            .min(area.width.saturating_sub(MARGIN * 2));

        let style = severity_style(toast.severity, theme);
        let line = Line::from(vec![
            Span::styled(format!("{} ", toast.severity.icon()), style),
            Span::styled(toast.message.as_str(), theme.text()),
        ]);
        let paragraph = Paragraph::new(line).wrap(Wrap { trim: true });
        let rows = u16::try_from(paragraph.line_count(width.saturating_sub(2)))
            .unwrap_or(u16::MAX)
            .clamp(1, MAX_TOAST_LINES);
        let height = rows + 2;

        if bottom < area.y + height {
            break;
        }
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + MARGIN),
            y: bottom - height,
            width,
            height,
        };
        bottom -= height;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .style(theme.panel_background());

        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph.block(block), toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::views::test_support::{render_to_lines, screen_contains};
    use std::time::{Duration, Instant};

    #[test]
    fn test_toasts_stack_newest_at_bottom() {
        let mut state = AppState::default();
        let expires = Instant::now() + Duration::from_secs(4);
        state.feedback.notify("Saved", Severity::Success, expires);
        state.feedback.notify("Request failed", Severity::Error, expires);

        let lines = render_to_lines(&state, 80, 24);
        let row_of = |text: &str| lines.iter().position(|l| l.contains(text)).unwrap();
        assert!(screen_contains(&lines, "✓ Saved"));
        assert!(screen_contains(&lines, "✗ Request failed"));
        assert!(row_of("Saved") < row_of("Request failed"));
    }

    #[test]
    fn test_long_message_wraps_instead_of_clipping() {
        let mut state = AppState::default();
        let message = format!("Server error: {}retry_later", "connection reset ".repeat(6));
        state.feedback.notify(
            message,
            Severity::Error,
            Instant::now() + Duration::from_secs(4),
        );

        let lines = render_to_lines(&state, 80, 24);
        assert!(screen_contains(&lines, "✗ Server error:"));
        assert!(screen_contains(&lines, "retry_later"));
    }
}
