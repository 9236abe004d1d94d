//! AI Tools Middleware
//!
//! Runs AI tools and exports on the manuscript server. Every call shows the
//! loading indicator while it runs, then either opens the result in the modal
//! or raises an error toast with the server's message.

use anyhow::{Context, Result};
use manuscript_client::{AiTool, ManuscriptApi, Project, SubmissionPacket, SynopsisLength};
use tokio::runtime::Runtime;

use crate::actions::{Action, ToolAction};
use crate::dispatcher::Dispatcher;
use crate::feedback::Feedback;
use crate::middleware::{spawn_request, Middleware};
use crate::state::{AppState, Severity};

const RESULT_FOOTER: &str = "s save · Esc close";

pub struct ToolsMiddleware {
    runtime: Runtime,
    api: ManuscriptApi,
}

impl ToolsMiddleware {
    pub fn new(api: ManuscriptApi) -> Result<Self> {
        Ok(Self {
            runtime: Runtime::new().context("Failed to create tokio runtime")?,
            api,
        })
    }

    /// Run a request that yields text and show it in the modal under `title`
    fn run_text<Fut>(&self, dispatcher: &Dispatcher, loading: &str, title: String, request: Fut)
    where
        Fut: std::future::Future<Output = Result<String, manuscript_client::ApiError>>
            + Send
            + 'static,
    {
        spawn_request(
            &self.runtime,
            dispatcher,
            Some(loading),
            request,
            move |text, dispatcher| {
                dispatcher.open_modal(&title, &text, RESULT_FOOTER);
            },
        );
    }

    fn run_tool(&self, tool: AiTool, input: &str, dispatcher: &Dispatcher) {
        let api = self.api.clone();
        let input = input.to_string();
        self.run_text(
            dispatcher,
            &format!("{}...", tool.label()),
            tool.label().to_string(),
            async move { api.run_ai_tool(tool, &input, None).await },
        );
    }

    fn run_for_project(&self, action: &ToolAction, project: &Project, dispatcher: &Dispatcher) {
        let api = self.api.clone();
        let id = project.id;
        let name = project.title.clone();

        match action {
            ToolAction::ContinuityCheck => self.run_text(
                dispatcher,
                "Checking continuity...",
                format!("Continuity check: {}", name),
                async move { api.check_project_continuity(id).await },
            ),
            ToolAction::QueryLetter => self.run_text(
                dispatcher,
                "Writing query letter...",
                format!("Query letter: {}", name),
                async move { api.query_letter(id).await },
            ),
            ToolAction::Synopsis(length) => {
                let length = *length;
                self.run_text(
                    dispatcher,
                    "Writing synopsis...",
                    format!("{} synopsis: {}", synopsis_label(length), name),
                    async move { api.synopsis(id, length).await },
                )
            }
            ToolAction::SubmissionPacket => spawn_request(
                &self.runtime,
                dispatcher,
                Some("Generating submission packet..."),
                async move { api.submission_packet(id).await },
                move |packet, dispatcher| {
                    dispatcher.open_modal(
                        &format!("Submission packet: {}", name),
                        &packet_summary(&packet),
                        RESULT_FOOTER,
                    );
                },
            ),
            ToolAction::Run { .. } | ToolAction::SaveModal => {}
        }
    }
}

impl Middleware for ToolsMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Tools(tool_action) = action else {
            return true;
        };

        match tool_action {
            ToolAction::Run { tool, input } => {
                self.run_tool(*tool, input, dispatcher);
                false
            }
            ToolAction::ContinuityCheck
            | ToolAction::QueryLetter
            | ToolAction::Synopsis(_)
            | ToolAction::SubmissionPacket => {
                match state.projects.selected_project() {
                    Some(project) => self.run_for_project(tool_action, project, dispatcher),
                    None => dispatcher.notify("No project selected", Severity::Warning),
                }
                false
            }
            // Saving is the export middleware's job
            ToolAction::SaveModal => true,
        }
    }
}

fn synopsis_label(length: SynopsisLength) -> &'static str {
    match length {
        SynopsisLength::Short => "Short",
        SynopsisLength::Standard => "Standard",
        SynopsisLength::Long => "Long",
    }
}

/// Server message followed by one line per generated file
pub fn packet_summary(packet: &SubmissionPacket) -> String {
    let mut lines = vec![packet.message.clone()];
    if !packet.files.is_empty() {
        lines.push(String::new());
    }
    lines.extend(
        packet
            .files
            .iter()
            .map(|file| format!("{}  →  {}", file.name, file.path)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FeedbackAction;
    use crate::middleware::test_support::*;
    use manuscript_client::{ApiError, Method, PacketFile};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn state_with_project() -> AppState {
        let mut state = AppState::default();
        state.projects.replace(vec![Project {
            id: 7,
            title: "The Salt Road".into(),
            ..Project::default()
        }]);
        state
    }

    fn opened_modal(actions: &[Action]) -> Option<(String, String)> {
        actions.iter().find_map(|a| match a {
            Action::Feedback(FeedbackAction::OpenModal(content)) => {
                Some((content.title.clone(), content.body.clone()))
            }
            _ => None,
        })
    }

    #[test]
    fn test_expand_idea_opens_result_in_modal() {
        let mock = MockGateway::replying(vec![Ok(json!({ "result": "I. The lighthouse..." }))]);
        let mut middleware = ToolsMiddleware::new(api_with(&mock)).unwrap();
        let (dispatcher, rx) = channel_dispatcher();

        middleware.handle(
            &Action::Tools(ToolAction::Run {
                tool: AiTool::ExpandIdea,
                input: "a lighthouse keeper".into(),
            }),
            &AppState::default(),
            &dispatcher,
        );

        let actions = collect_until_settled(&rx, 1);
        let (shows, hides) = loading_pairs(&actions);
        assert_eq!((shows.len(), hides.len()), (1, 1));
        assert_eq!(
            opened_modal(&actions),
            Some(("Expand idea".to_string(), "I. The lighthouse...".to_string()))
        );
        assert_eq!(
            mock.calls(),
            vec![(
                "/api/ai/expand-idea".to_string(),
                Method::Post,
                Some(json!({ "idea": "a lighthouse keeper" }))
            )]
        );
    }

    #[test]
    fn test_failed_tool_hides_loading_and_shows_error() {
        let mock = MockGateway::replying(vec![Err(ApiError::request_failed(
            "No idea provided",
        ))]);
        let mut middleware = ToolsMiddleware::new(api_with(&mock)).unwrap();
        let (dispatcher, rx) = channel_dispatcher();

        middleware.handle(
            &Action::Tools(ToolAction::Run {
                tool: AiTool::ExpandIdea,
                input: "x".into(),
            }),
            &AppState::default(),
            &dispatcher,
        );

        let actions = collect_until_settled(&rx, 1);
        let (shows, hides) = loading_pairs(&actions);
        assert_eq!((shows.len(), hides.len()), (1, 1));
        assert_eq!(error_toasts(&actions), vec!["No idea provided".to_string()]);
        assert!(opened_modal(&actions).is_none());
    }

    #[test]
    fn test_query_letter_targets_selected_project() {
        let mock = MockGateway::replying(vec![Ok(json!({ "result": "Dear Agent," }))]);
        let mut middleware = ToolsMiddleware::new(api_with(&mock)).unwrap();
        let (dispatcher, rx) = channel_dispatcher();

        middleware.handle(
            &Action::Tools(ToolAction::QueryLetter),
            &state_with_project(),
            &dispatcher,
        );

        let actions = collect_until_settled(&rx, 1);
        assert_eq!(
            opened_modal(&actions),
            Some((
                "Query letter: The Salt Road".to_string(),
                "Dear Agent,".to_string()
            ))
        );
        assert_eq!(mock.calls()[0].0, "/api/projects/7/export/query-letter");
    }

    #[test]
    fn test_project_tools_need_a_selection() {
        let mock = MockGateway::replying(vec![]);
        let mut middleware = ToolsMiddleware::new(api_with(&mock)).unwrap();
        let (dispatcher, rx) = channel_dispatcher();

        middleware.handle(
            &Action::Tools(ToolAction::ContinuityCheck),
            &AppState::default(),
            &dispatcher,
        );

        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Feedback(FeedbackAction::Notify { severity: Severity::Warning, .. })
        ));
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn test_packet_summary_lists_files() {
        let packet = SubmissionPacket {
            message: "Submission packet generated".into(),
            files: vec![PacketFile {
                name: "query_letter.docx".into(),
                path: "/exports/query_letter.docx".into(),
            }],
        };
        assert_eq!(
            packet_summary(&packet),
            "Submission packet generated\n\nquery_letter.docx  →  /exports/query_letter.docx"
        );
    }
}
