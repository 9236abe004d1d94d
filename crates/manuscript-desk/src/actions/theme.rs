use manuscript_config::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Flip between dark and light and persist the choice
    Toggle,
    /// Apply a mode without persisting it
    Apply(ThemeMode),
}
