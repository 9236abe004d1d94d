//! AI tool and export actions

use manuscript_client::{AiTool, SynopsisLength};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolAction {
    /// Run a text-in/text-out AI tool
    Run { tool: AiTool, input: String },
    /// Continuity check across the selected project
    ContinuityCheck,
    QueryLetter,
    Synopsis(SynopsisLength),
    SubmissionPacket,
    /// Save the open modal as an HTML document
    SaveModal,
}
