use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_overlay: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,
            bg_overlay: tailwind::SLATE.c900,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg_primary: tailwind::STONE.c50,
            bg_panel: tailwind::STONE.c100,
            bg_overlay: tailwind::STONE.c300,

            text_primary: tailwind::STONE.c900,
            text_secondary: tailwind::STONE.c800,
            text_muted: tailwind::STONE.c500,

            accent_primary: tailwind::INDIGO.c700,
            accent_secondary: tailwind::INDIGO.c500,

            status_success: tailwind::GREEN.c700,
            status_error: tailwind::RED.c700,
            status_warning: tailwind::AMBER.c700,
            status_info: tailwind::BLUE.c700,

            selected_bg: tailwind::INDIGO.c600,
            selected_fg: Color::White,
        }
    }

    /// Pick the light or dark variant
    pub fn for_light_mode(light: bool) -> Self {
        if light {
            Self::light()
        } else {
            Self::dark()
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the full-screen background
    pub fn background(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg_primary)
    }

    /// Style for panel backgrounds (modal, help, toasts)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the area behind a modal
    pub fn backdrop(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .bg(self.bg_overlay)
            .add_modifier(Modifier::DIM)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "Esc" in "Esc close")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for selected list rows
    pub fn list_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for warning messages
    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for informational messages
    pub fn info(&self) -> Style {
        Style::default().fg(self.status_info)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
        assert_eq!(Theme::for_light_mode(true), Theme::light());
    }

    #[test]
    fn light_and_dark_differ_in_background() {
        assert_ne!(Theme::light().bg_primary, Theme::dark().bg_primary);
    }
}
