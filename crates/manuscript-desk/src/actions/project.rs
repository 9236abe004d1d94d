//! Project browser actions

use manuscript_client::{Chapter, Project};

#[derive(Debug, Clone)]
pub enum ProjectAction {
    /// Fetch the project list
    Load,
    Loaded(Vec<Project>),
    SelectNext,
    SelectPrevious,
    /// The selection settled on this project; fetch its chapters
    Selected(u64),
    ChaptersLoaded {
        project_id: u64,
        chapters: Vec<Chapter>,
    },
    /// Create a project with the given title
    Create(String),
    /// Ask to delete the selected project
    DeleteSelected,
    /// Delete a project; only dispatched once the user confirmed
    Delete { id: u64, title: String },
    /// Show the selected project with its chapters in the modal
    OpenDetail,
}
