//! AI tool endpoints
//!
//! The server proxies every tool to the text-generation provider and answers
//! with `{"result": "..."}`. This module only knows where each tool lives and
//! which field carries its main input; the generation itself happens
//! server-side.

use serde_json::{Map, Value};

/// One AI-assisted writing tool exposed under `/api/ai/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiTool {
    // Expansion
    ExpandIdea,
    DevelopConcept,
    ExpandChapter,
    ExpandScene,
    // Editing
    DevelopmentalEdit,
    LineEdit,
    CopyEdit,
    Rewrite,
    Improve,
    StrengthenDialogue,
    AdjustTone,
    ContinuityCheck,
    // Research
    Research,
    FactCheck,
    WorldBuilding,
    CharacterResearch,
    SettingResearch,
}

impl AiTool {
    pub const ALL: [AiTool; 17] = [
        Self::ExpandIdea,
        Self::DevelopConcept,
        Self::ExpandChapter,
        Self::ExpandScene,
        Self::DevelopmentalEdit,
        Self::LineEdit,
        Self::CopyEdit,
        Self::Rewrite,
        Self::Improve,
        Self::StrengthenDialogue,
        Self::AdjustTone,
        Self::ContinuityCheck,
        Self::Research,
        Self::FactCheck,
        Self::WorldBuilding,
        Self::CharacterResearch,
        Self::SettingResearch,
    ];

    /// Endpoint path relative to the server root
    pub fn path(&self) -> &'static str {
        match self {
            Self::ExpandIdea => "/api/ai/expand-idea",
            Self::DevelopConcept => "/api/ai/develop-concept",
            Self::ExpandChapter => "/api/ai/expand-chapter",
            Self::ExpandScene => "/api/ai/expand-scene",
            Self::DevelopmentalEdit => "/api/ai/developmental-edit",
            Self::LineEdit => "/api/ai/line-edit",
            Self::CopyEdit => "/api/ai/copy-edit",
            Self::Rewrite => "/api/ai/rewrite",
            Self::Improve => "/api/ai/improve",
            Self::StrengthenDialogue => "/api/ai/strengthen-dialogue",
            Self::AdjustTone => "/api/ai/adjust-tone",
            Self::ContinuityCheck => "/api/ai/continuity-check",
            Self::Research => "/api/ai/research",
            Self::FactCheck => "/api/ai/fact-check",
            Self::WorldBuilding => "/api/ai/world-building",
            Self::CharacterResearch => "/api/ai/character-research",
            Self::SettingResearch => "/api/ai/setting-research",
        }
    }

    /// Name of the request field holding the tool's main text input
    pub fn input_field(&self) -> &'static str {
        match self {
            Self::ExpandIdea => "idea",
            Self::DevelopConcept => "concept",
            Self::ExpandChapter => "summary",
            Self::ExpandScene => "scene_brief",
            Self::Research => "topic",
            Self::WorldBuilding => "world_details",
            Self::CharacterResearch => "character_details",
            Self::SettingResearch => "setting",
            Self::DevelopmentalEdit
            | Self::LineEdit
            | Self::CopyEdit
            | Self::Rewrite
            | Self::Improve
            | Self::StrengthenDialogue
            | Self::AdjustTone
            | Self::ContinuityCheck
            | Self::FactCheck => "content",
        }
    }

    /// Short human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExpandIdea => "Expand idea",
            Self::DevelopConcept => "Develop concept",
            Self::ExpandChapter => "Expand chapter",
            Self::ExpandScene => "Expand scene",
            Self::DevelopmentalEdit => "Developmental edit",
            Self::LineEdit => "Line edit",
            Self::CopyEdit => "Copy edit",
            Self::Rewrite => "Rewrite",
            Self::Improve => "Improve prose",
            Self::StrengthenDialogue => "Strengthen dialogue",
            Self::AdjustTone => "Adjust tone",
            Self::ContinuityCheck => "Continuity check",
            Self::Research => "Research",
            Self::FactCheck => "Fact check",
            Self::WorldBuilding => "World building",
            Self::CharacterResearch => "Character research",
            Self::SettingResearch => "Setting research",
        }
    }

    /// Extra request fields the server requires besides the main input
    pub fn required_extras(&self) -> &'static [&'static str] {
        match self {
            Self::Rewrite => &["instructions"],
            Self::AdjustTone => &["target_tone"],
            Self::CharacterResearch => &["research_needs"],
            _ => &[],
        }
    }

    /// First required extra absent from `extras`, if any
    pub fn missing_extra(&self, extras: Option<&Value>) -> Option<&'static str> {
        let present = |field: &str| {
            extras
                .and_then(|extras| extras.get(field))
                .is_some_and(|value| !value.is_null())
        };
        self.required_extras()
            .iter()
            .copied()
            .find(|field| !present(field))
    }

    /// Build a request payload from the main input plus optional extras.
    ///
    /// `extras` must be a JSON object; its keys are merged in, but never
    /// override the main input.
    pub fn payload(&self, input: &str, extras: Option<Value>) -> Value {
        let mut body = match extras {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        body.insert(self.input_field().to_string(), Value::String(input.to_string()));
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = AiTool::ALL.iter().map(|t| t.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), AiTool::ALL.len());
    }

    #[test]
    fn test_payload_uses_tool_input_field() {
        let payload = AiTool::ExpandIdea.payload("a lighthouse keeper's ghost", None);
        assert_eq!(payload, json!({ "idea": "a lighthouse keeper's ghost" }));
    }

    #[test]
    fn test_payload_merges_extras_without_overriding_input() {
        let payload = AiTool::AdjustTone.payload(
            "It was fine.",
            Some(json!({ "target_tone": "ominous", "content": "overridden?" })),
        );
        assert_eq!(
            payload,
            json!({ "content": "It was fine.", "target_tone": "ominous" })
        );
    }

    #[test]
    fn test_missing_extra() {
        assert_eq!(AiTool::AdjustTone.missing_extra(None), Some("target_tone"));
        assert_eq!(
            AiTool::AdjustTone.missing_extra(Some(&json!({ "target_tone": null }))),
            Some("target_tone")
        );
        assert_eq!(
            AiTool::AdjustTone.missing_extra(Some(&json!({ "target_tone": "wry" }))),
            None
        );
        assert_eq!(AiTool::LineEdit.missing_extra(None), None);
    }

    #[test]
    fn test_non_object_extras_are_ignored() {
        let payload = AiTool::Research.payload("tides", Some(json!(["x"])));
        assert_eq!(payload, json!({ "topic": "tides" }));
    }
}
