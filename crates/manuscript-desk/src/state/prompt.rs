use crate::actions::PromptPurpose;

/// Open prompt (present only while the prompt view is shown)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub purpose: PromptPurpose,
    pub value: String,
}

impl PromptState {
    pub fn new(purpose: PromptPurpose) -> Self {
        Self {
            purpose,
            value: String::new(),
        }
    }

    /// Trimmed input, or `None` when there is nothing to submit
    pub fn submission(&self) -> Option<&str> {
        let value = self.value.trim();
        (!value.is_empty()).then_some(value)
    }
}
