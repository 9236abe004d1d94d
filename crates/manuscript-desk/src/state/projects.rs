//! Project browser state

use manuscript_client::{Chapter, Project};

#[derive(Debug, Clone, Default)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    pub selected: usize,
    /// Chapters of the selected project, once loaded
    pub chapters: Option<ProjectChapters>,
    /// False until the first list arrives
    pub loaded: bool,
    /// Bumped whenever the selected project changes or the list is reloaded
    pub selection_revision: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectChapters {
    pub project_id: u64,
    pub chapters: Vec<Chapter>,
}

impl ProjectsState {
    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    /// Index after moving down, wrapping at the end
    pub fn next_index(&self) -> usize {
        if self.projects.is_empty() {
            0
        } else {
            (self.selected + 1) % self.projects.len()
        }
    }

    /// Index after moving up, wrapping at the start
    pub fn previous_index(&self) -> usize {
        match self.projects.len() {
            0 => 0,
            len if self.selected == 0 => len - 1,
            _ => self.selected - 1,
        }
    }

    /// Move the selection; a move onto the same row changes nothing
    pub fn select(&mut self, index: usize) {
        if index != self.selected {
            self.selected = index;
            self.selection_revision = self.selection_revision.wrapping_add(1);
        }
    }

    /// Replace the list, keeping the selected project when it still exists
    pub fn replace(&mut self, projects: Vec<Project>) {
        let selected_id = self.selected_project().map(|p| p.id);
        self.projects = projects;
        self.loaded = true;
        self.selection_revision = self.selection_revision.wrapping_add(1);
        self.selected = selected_id
            .and_then(|id| self.projects.iter().position(|p| p.id == id))
            .unwrap_or(0);
        if self.chapters.as_ref().map(|c| c.project_id) != self.selected_project().map(|p| p.id) {
            self.chapters = None;
        }
    }

    /// Chapters for the selected project, if they match it
    pub fn selected_chapters(&self) -> Option<&[Chapter]> {
        let selected = self.selected_project()?;
        self.chapters
            .as_ref()
            .filter(|c| c.project_id == selected.id)
            .map(|c| c.chapters.as_slice())
    }
}
