//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - `TextInput`: generic text input that the active view translates
//! - `Global`: application-wide actions (keys, mouse, quit, view management, tick)
//! - Domain variants: already targeted at a specific reducer or middleware

pub mod bootstrap;
pub mod confirmation;
pub mod feedback;
pub mod global;
pub mod project;
pub mod prompt;
pub mod text_input;
pub mod theme;
pub mod tools;

pub use bootstrap::BootstrapAction;
pub use confirmation::ConfirmationAction;
pub use feedback::FeedbackAction;
pub use global::GlobalAction;
pub use project::ProjectAction;
pub use prompt::{PromptAction, PromptPurpose};
pub use text_input::TextInputAction;
pub use theme::ThemeAction;
pub use tools::ToolAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    /// Global application actions
    Global(GlobalAction),
    /// Startup sequence
    Bootstrap(BootstrapAction),
    /// Loading indicator, toasts and the modal dialog
    Feedback(FeedbackAction),
    /// Dark/light theme
    Theme(ThemeAction),
    /// Project browser
    Project(ProjectAction),
    /// Single-line prompt used by create/AI actions
    Prompt(PromptAction),
    /// Yes/no question before a destructive action
    Confirmation(ConfirmationAction),
    /// AI tools and exports
    Tools(ToolAction),
}
