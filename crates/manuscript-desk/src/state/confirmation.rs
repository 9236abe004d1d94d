//! Confirmation popup state

use crate::actions::{Action, ProjectAction};

/// What runs when the user confirms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationIntent {
    DeleteProject { id: u64, title: String },
}

impl ConfirmationIntent {
    pub fn title(&self) -> &'static str {
        match self {
            Self::DeleteProject { .. } => "Delete project",
        }
    }

    /// What confirming does, shown next to the confirm key
    pub fn verb(&self) -> &'static str {
        match self {
            Self::DeleteProject { .. } => "delete",
        }
    }

    pub fn question(&self) -> String {
        match self {
            Self::DeleteProject { title, .. } => {
                format!("Delete \"{}\" with all its chapters?", title)
            }
        }
    }

    /// The action to dispatch once confirmed
    pub fn action(&self) -> Action {
        match self {
            Self::DeleteProject { id, title } => Action::Project(ProjectAction::Delete {
                id: *id,
                title: title.clone(),
            }),
        }
    }
}
