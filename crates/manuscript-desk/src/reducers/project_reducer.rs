//! Project browser reducer

use crate::actions::{Action, ProjectAction};
use crate::state::{ProjectChapters, ProjectsState};

pub fn reduce_projects(mut state: ProjectsState, action: &ProjectAction) -> ProjectsState {
    match action {
        ProjectAction::Loaded(projects) => {
            log::debug!("Loaded {} projects", projects.len());
            state.replace(projects.clone());
        }
        ProjectAction::SelectNext => state.select(state.next_index()),
        ProjectAction::SelectPrevious => state.select(state.previous_index()),
        ProjectAction::ChaptersLoaded {
            project_id,
            chapters,
        } => {
            // Ignore late responses for a project that is no longer selected
            if state.selected_project().map(|p| p.id) == Some(*project_id) {
                state.chapters = Some(ProjectChapters {
                    project_id: *project_id,
                    chapters: chapters.clone(),
                });
            }
        }
        ProjectAction::Load
        | ProjectAction::Selected(_)
        | ProjectAction::Create(_)
        | ProjectAction::DeleteSelected
        | ProjectAction::Delete { .. }
        | ProjectAction::OpenDetail => {
            // Side effects only - handled by middleware
        }
    }
    state
}

/// Chapter request for the selection left behind by a batch of reduced actions
///
/// `revision_before` is the selection revision before the batch. Built from
/// reduced state, so repeated keys that outrun the worker's snapshot still
/// load the project the cursor ended on.
pub fn chapters_request(revision_before: u64, state: &ProjectsState) -> Option<Action> {
    if state.selection_revision == revision_before {
        return None;
    }
    state
        .selected_project()
        .map(|project| Action::Project(ProjectAction::Selected(project.id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use manuscript_client::{Chapter, Project};

    fn loaded(ids: &[u64]) -> ProjectsState {
        let projects = ids
            .iter()
            .map(|&id| Project {
                id,
                ..Project::default()
            })
            .collect();
        reduce_projects(ProjectsState::default(), &ProjectAction::Loaded(projects))
    }

    #[test]
    fn test_select_next_and_previous() {
        let state = loaded(&[1, 2, 3]);
        let state = reduce_projects(state, &ProjectAction::SelectNext);
        assert_eq!(state.selected, 1);
        let state = reduce_projects(state, &ProjectAction::SelectPrevious);
        let state = reduce_projects(state, &ProjectAction::SelectPrevious);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_repeated_moves_request_chapters_for_final_selection() {
        let state = loaded(&[10, 20, 30]);
        let revision = state.selection_revision;

        let state = reduce_projects(state, &ProjectAction::SelectNext);
        let state = reduce_projects(state, &ProjectAction::SelectNext);

        assert!(matches!(
            chapters_request(revision, &state),
            Some(Action::Project(ProjectAction::Selected(30)))
        ));
        assert!(chapters_request(state.selection_revision, &state).is_none());
    }

    #[test]
    fn test_reload_requests_chapters_again() {
        let state = loaded(&[10, 20]);
        let revision = state.selection_revision;
        let state = reduce_projects(
            state,
            &ProjectAction::Loaded(vec![Project {
                id: 10,
                ..Project::default()
            }]),
        );
        assert!(matches!(
            chapters_request(revision, &state),
            Some(Action::Project(ProjectAction::Selected(10)))
        ));
    }

    #[test]
    fn test_move_within_single_project_requests_nothing() {
        let state = loaded(&[10]);
        let revision = state.selection_revision;
        let state = reduce_projects(state, &ProjectAction::SelectNext);
        assert!(chapters_request(revision, &state).is_none());
    }

    #[test]
    fn test_chapters_for_other_project_are_ignored() {
        let state = loaded(&[1, 2]);
        let state = reduce_projects(
            state,
            &ProjectAction::ChaptersLoaded {
                project_id: 2,
                chapters: vec![Chapter::default()],
            },
        );
        assert!(state.chapters.is_none());

        let state = reduce_projects(
            state,
            &ProjectAction::ChaptersLoaded {
                project_id: 1,
                chapters: vec![Chapter::default()],
            },
        );
        assert_eq!(state.selected_chapters().map(|c| c.len()), Some(1));
    }
}
