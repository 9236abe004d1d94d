pub mod app_reducer;
pub mod confirmation_reducer;
pub mod feedback_reducer;
pub mod project_reducer;
pub mod prompt_reducer;

pub use app_reducer::reduce;
