//! Project Middleware
//!
//! Handles project-related side effects against the manuscript server:
//! - Loading the project list (on bootstrap and refresh)
//! - Loading chapters once the selection settles on a project
//! - Creating projects, and deleting them after confirmation
//! - Showing a project outline in the modal

use anyhow::{Context, Result};
use manuscript_client::{ManuscriptApi, NewProject, Project};
use tokio::runtime::Runtime;

use crate::actions::{Action, BootstrapAction, ConfirmationAction, ProjectAction};
use crate::dispatcher::Dispatcher;
use crate::feedback::Feedback;
use crate::middleware::{spawn_request, Middleware};
use crate::state::{AppState, ConfirmationIntent, Severity};

pub struct ProjectMiddleware {
    runtime: Runtime,
    api: ManuscriptApi,
}

impl ProjectMiddleware {
    pub fn new(api: ManuscriptApi) -> Result<Self> {
        Ok(Self {
            runtime: Runtime::new().context("Failed to create tokio runtime")?,
            api,
        })
    }

    fn load_projects(&self, dispatcher: &Dispatcher) {
        let api = self.api.clone();
        spawn_request(
            &self.runtime,
            dispatcher,
            Some("Loading projects..."),
            async move { api.list_projects().await },
            |projects, dispatcher| {
                log::info!("ProjectMiddleware: loaded {} projects", projects.len());
                dispatcher.dispatch(Action::Project(ProjectAction::Loaded(projects)));
            },
        );
    }

    /// Chapters load quietly; a failure only raises a warning toast
    fn load_chapters(&self, project_id: u64, dispatcher: &Dispatcher) {
        let api = self.api.clone();
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match api.list_chapters(project_id).await {
                Ok(chapters) => {
                    dispatcher.dispatch(Action::Project(ProjectAction::ChaptersLoaded {
                        project_id,
                        chapters,
                    }));
                }
                Err(e) => {
                    log::warn!("Failed to load chapters for project {}: {}", project_id, e);
                    dispatcher.notify(e.message(), Severity::Warning);
                }
            }
        });
    }

    fn create_project(&self, title: &str, dispatcher: &Dispatcher) {
        let api = self.api.clone();
        let payload = NewProject::titled(title);
        spawn_request(
            &self.runtime,
            dispatcher,
            Some("Creating project..."),
            async move { api.create_project(&payload).await },
            |project, dispatcher| {
                dispatcher.success(&format!("Created \"{}\"", project.title));
                dispatcher.dispatch(Action::Project(ProjectAction::Load));
            },
        );
    }

    fn delete_project(&self, project_id: u64, title: &str, dispatcher: &Dispatcher) {
        let api = self.api.clone();
        let title = title.to_string();
        spawn_request(
            &self.runtime,
            dispatcher,
            Some("Deleting project..."),
            async move { api.delete_project(project_id).await },
            move |ack, dispatcher| {
                let message = if ack.message.is_empty() {
                    format!("Deleted \"{}\"", title)
                } else {
                    ack.message
                };
                dispatcher.success(&message);
                dispatcher.dispatch(Action::Project(ProjectAction::Load));
            },
        );
    }

    fn open_detail(&self, project_id: u64, dispatcher: &Dispatcher) {
        let api = self.api.clone();
        spawn_request(
            &self.runtime,
            dispatcher,
            None,
            async move { api.get_project(project_id).await },
            |project, dispatcher| {
                dispatcher.open_modal(
                    &project.title,
                    &project_outline(&project),
                    "s save · Esc close",
                );
            },
        );
    }
}

impl Middleware for ProjectMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) | Action::Project(ProjectAction::Load) => {
                self.load_projects(dispatcher);
                true
            }

            // Built by the UI thread from reduced state, never from this snapshot
            Action::Project(ProjectAction::Selected(project_id)) => {
                self.load_chapters(*project_id, dispatcher);
                false
            }

            Action::Project(ProjectAction::Create(title)) => {
                self.create_project(title, dispatcher);
                false
            }

            Action::Project(ProjectAction::DeleteSelected) => {
                match state.projects.selected_project() {
                    Some(project) => dispatcher.dispatch(Action::Confirmation(
                        ConfirmationAction::Show(ConfirmationIntent::DeleteProject {
                            id: project.id,
                            title: project.title.clone(),
                        }),
                    )),
                    None => dispatcher.notify("No project selected", Severity::Warning),
                }
                false
            }

            Action::Project(ProjectAction::Delete { id, title }) => {
                self.delete_project(*id, title, dispatcher);
                false
            }

            Action::Project(ProjectAction::OpenDetail) => {
                match state.projects.selected_project() {
                    Some(project) => self.open_detail(project.id, dispatcher),
                    None => dispatcher.notify("No project selected", Severity::Warning),
                }
                false
            }

            _ => true,
        }
    }
}

/// Plain-text outline of a project and its chapters
pub fn project_outline(project: &Project) -> String {
    let mut lines = Vec::new();

    if !project.subtitle.is_empty() {
        lines.push(project.subtitle.clone());
    }
    let mut facts = Vec::new();
    if !project.genre.is_empty() {
        facts.push(project.genre.clone());
    }
    if !project.status.is_empty() {
        facts.push(project.status.clone());
    }
    facts.push(format!(
        "{} / {} words ({:.1}%)",
        project.word_count, project.target_word_count, project.progress_percent
    ));
    lines.push(facts.join(" · "));

    if !project.synopsis.is_empty() {
        lines.push(String::new());
        lines.push(project.synopsis.clone());
    }

    let chapters = project.chapters.as_deref().unwrap_or_default();
    lines.push(String::new());
    if chapters.is_empty() {
        lines.push("No chapters yet.".to_string());
    }
    for chapter in chapters {
        let title = if chapter.title.is_empty() {
            "Untitled"
        } else {
            chapter.title.as_str()
        };
        lines.push(format!(
            "{}. {} [{}] {} words",
            chapter.order, title, chapter.status, chapter.word_count
        ));
        if !chapter.summary.is_empty() {
            lines.push(format!("   {}", chapter.summary));
        }
    }

    lines.join("\n")
}
