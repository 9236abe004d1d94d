//! Command identifiers
//!
//! Commands are the semantic actions users can trigger. Keybindings refer to
//! them by id; the help panel lists them by title.

use manuscript_client::{AiTool, SynopsisLength};
use serde::{Deserialize, Serialize};

use crate::actions::{
    Action, ConfirmationAction, GlobalAction, ProjectAction, PromptAction, PromptPurpose,
    ThemeAction, ToolAction,
};
use crate::views::HelpView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    NavigateNext,
    NavigatePrevious,

    // === Projects ===
    ProjectCreate,
    ProjectDelete,
    ProjectRefresh,
    ProjectOpenDetail,

    // === Confirmation ===
    ConfirmationAccept,
    ConfirmationDecline,

    // === AI tools ===
    ExpandIdea,
    DevelopConcept,
    Research,
    ContinuityCheck,

    // === Exports ===
    ExportQueryLetter,
    ExportSynopsis,
    ExportSubmissionPacket,

    // === Appearance ===
    ThemeToggle,

    // === General ===
    HelpToggle,
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Project(ProjectAction::SelectNext),
            Self::NavigatePrevious => Action::Project(ProjectAction::SelectPrevious),

            Self::ProjectCreate => Action::Prompt(PromptAction::Open(PromptPurpose::NewProject)),
            Self::ProjectDelete => Action::Project(ProjectAction::DeleteSelected),
            Self::ProjectRefresh => Action::Project(ProjectAction::Load),
            Self::ProjectOpenDetail => Action::Project(ProjectAction::OpenDetail),

            Self::ConfirmationAccept => Action::Confirmation(ConfirmationAction::Confirm),
            Self::ConfirmationDecline => Action::Confirmation(ConfirmationAction::Cancel),

            Self::ExpandIdea => tool_prompt(AiTool::ExpandIdea),
            Self::DevelopConcept => tool_prompt(AiTool::DevelopConcept),
            Self::Research => tool_prompt(AiTool::Research),
            Self::ContinuityCheck => Action::Tools(ToolAction::ContinuityCheck),

            Self::ExportQueryLetter => Action::Tools(ToolAction::QueryLetter),
            Self::ExportSynopsis => Action::Tools(ToolAction::Synopsis(SynopsisLength::Standard)),
            Self::ExportSubmissionPacket => Action::Tools(ToolAction::SubmissionPacket),

            Self::ThemeToggle => Action::Theme(ThemeAction::Toggle),

            Self::HelpToggle => Action::Global(GlobalAction::PushView(Box::new(HelpView::new()))),
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Whether the command answers the confirmation popup
    pub fn answers_confirmation(&self) -> bool {
        matches!(self, Self::ConfirmationAccept | Self::ConfirmationDecline)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Next project",
            Self::NavigatePrevious => "Previous project",
            Self::ProjectCreate => "New project",
            Self::ProjectDelete => "Delete project",
            Self::ProjectRefresh => "Refresh projects",
            Self::ProjectOpenDetail => "Show project outline",
            Self::ConfirmationAccept => "Confirm",
            Self::ConfirmationDecline => "Cancel",
            Self::ExpandIdea => "Expand an idea",
            Self::DevelopConcept => "Develop a concept",
            Self::Research => "Research a topic",
            Self::ContinuityCheck => "Continuity check",
            Self::ExportQueryLetter => "Query letter",
            Self::ExportSynopsis => "Synopsis",
            Self::ExportSubmissionPacket => "Submission packet",
            Self::ThemeToggle => "Toggle dark/light theme",
            Self::HelpToggle => "Key bindings",
            Self::GlobalClose => "Close / quit",
            Self::GlobalQuit => "Force quit",
        }
    }
}

fn tool_prompt(tool: AiTool) -> Action {
    Action::Prompt(PromptAction::Open(PromptPurpose::Tool(tool)))
}
