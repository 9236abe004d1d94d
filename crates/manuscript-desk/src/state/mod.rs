//! Application state, split by concern

mod app;
mod confirmation;
mod feedback;
mod projects;
mod prompt;

pub use app::AppState;
pub use confirmation::ConfirmationIntent;
pub use feedback::{FeedbackState, ModalContent, ModalState, Severity, Toast};
pub use projects::{ProjectChapters, ProjectsState};
pub use prompt::PromptState;
