//! Modal dialog
//!
//! A single centered dialog over a dimmed backdrop. The body wraps and can be
//! scrolled; the footer hint sits on the bottom border.

use manuscript_theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::state::ModalState;

/// Dialog rectangle for a terminal of the given size
///
/// Shared with the modal middleware, which treats clicks outside it as
/// backdrop clicks.
pub fn modal_area(area: Rect) -> Rect {
    let width = super::percent(area.width, 70).clamp(40.min(area.width), 100);
    let height = super::percent(area.height, 70).max(8.min(area.height));
    super::centered(area, width, height)
}

fn dialog_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

/// Largest scroll offset that still fills the dialog, counted in wrapped rows
pub fn max_scroll(body: &str, area: Rect) -> u16 {
    let inner = dialog_block().inner(modal_area(area));
    let rows = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .line_count(inner.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}

pub fn render(modal: &ModalState, theme: &Theme, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(theme.backdrop()), area);

    let dialog = modal_area(area);
    f.render_widget(Clear, dialog);

    let mut block = dialog_block()
        .title(format!(" {} ", modal.content.title))
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());

    if !modal.content.footer.is_empty() {
        block = block.title_bottom(footer_line(&modal.content.footer, theme));
    }

    let body = Paragraph::new(modal.content.body.as_str())
        .style(theme.text())
        .wrap(Wrap { trim: false })
        .scroll((modal.scroll.min(max_scroll(&modal.content.body, area)), 0))
        .block(block);

    f.render_widget(body, dialog);
}

/// "s save · Esc close" with the keys highlighted
fn footer_line<'a>(footer: &'a str, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (i, hint) in footer.split(" · ").enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme.muted()));
        }
        match hint.split_once(' ') {
            Some((key, description)) => {
                spans.push(Span::styled(key, theme.key_hint().bold()));
                spans.push(Span::styled(format!(" {}", description), theme.muted()));
            }
            None => spans.push(Span::styled(hint, theme.muted())),
        }
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}
