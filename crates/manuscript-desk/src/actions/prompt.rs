//! Prompt actions
//!
//! The prompt is a one-line input shown for actions that need free text
//! (a new project title, an idea to expand, a research topic).

use manuscript_client::AiTool;

/// What the submitted text is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    NewProject,
    Tool(AiTool),
}

impl PromptPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            Self::NewProject => "New project",
            Self::Tool(tool) => tool.label(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NewProject => "Title:",
            Self::Tool(AiTool::ExpandIdea) => "Idea:",
            Self::Tool(AiTool::DevelopConcept) => "Concept:",
            Self::Tool(AiTool::Research) => "Topic:",
            Self::Tool(_) => "Text:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Open(PromptPurpose),
    Char(char),
    Backspace,
    ClearLine,
    Cancel,
    /// Handled by middleware, which dispatches the purpose's action
    Submit,
    /// Close the prompt after a successful submit
    Submitted,
}
