//! Manuscript API data transfer objects
//!
//! Records mirror the JSON the server returns. Unknown fields are ignored
//! and missing ones fall back to defaults, so older and newer servers both
//! deserialize cleanly.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Nullable columns arrive as JSON `null`; read them as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A full narrative project (book, novella, collection, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub genre: String,
    /// "fiction" or "nonfiction"
    #[serde(deserialize_with = "null_as_default")]
    pub project_type: String,
    /// draft, revision, final, submitted
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub synopsis: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_word_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub word_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub progress_percent: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub author_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub themes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub chapter_count: u64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    /// Present on single-project responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<Chapter>>,
}

/// A chapter within a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chapter {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
    /// outline, draft, revision, final
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pov_character: String,
    #[serde(deserialize_with = "null_as_default")]
    pub setting: String,
    #[serde(deserialize_with = "null_as_default")]
    pub word_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub scene_count: u64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    /// Present on single-chapter responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenes: Option<Vec<Scene>>,
}

/// A scene within a chapter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub chapter_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    /// action, reaction, exposition, dialogue
    #[serde(deserialize_with = "null_as_default")]
    pub scene_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub word_count: u64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// A character sheet attached to a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// protagonist, antagonist, supporting, minor
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub backstory: String,
    #[serde(deserialize_with = "null_as_default")]
    pub motivations: String,
    #[serde(deserialize_with = "null_as_default")]
    pub arc_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    pub created_at: Option<NaiveDateTime>,
}

/// A research note attached to a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchNote {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// general, historical, technical, setting, character
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_citation: String,
    /// JSON array encoded as a string, e.g. `["ships", "1820s"]`
    #[serde(deserialize_with = "null_as_default")]
    pub tags: String,
    pub created_at: Option<NaiveDateTime>,
}

impl ResearchNote {
    /// Decoded tags; an empty or malformed tag string yields no tags
    pub fn tag_list(&self) -> Vec<String> {
        serde_json::from_str(&self.tags).unwrap_or_default()
    }
}

/// One entry of a project's revision history
///
/// The server truncates `content_before`/`content_after` to a preview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Revision {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: u64,
    pub chapter_id: Option<u64>,
    /// edit, rewrite, expand, correct, improve
    #[serde(deserialize_with = "null_as_default")]
    pub revision_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_before: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_after: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for creating a project; unset fields use server defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
}

impl NewProject {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial project update; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for creating a chapter; the server numbers it when `order` is unset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewChapter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pov_character: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Partial chapter update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChapterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for creating a scene
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewScene {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_type: Option<String>,
}

/// Partial scene update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_type: Option<String>,
}

/// Payload for creating a character; the server names it "Unnamed Character" when unset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewCharacter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backstory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial character update
pub type CharacterUpdate = NewCharacter;

/// Payload for creating a research note
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewResearchNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_citation: Option<String>,
    /// JSON array encoded as a string; see [`NewResearchNote::with_tags`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl NewResearchNote {
    /// Encode `tags` the way the server stores them
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(serde_json::Value::from(tags.to_vec()).to_string());
        self
    }
}

/// Partial research note update
pub type ResearchNoteUpdate = NewResearchNote;

/// Text result returned by AI tools and text exports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiResult {
    pub result: String,
}

/// Plain acknowledgement, e.g. after a delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
}

/// A file produced server-side as part of a submission packet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketFile {
    pub name: String,
    pub path: String,
}

/// Result of generating a submission packet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPacket {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub files: Vec<PacketFile>,
}

/// Synopsis length accepted by the synopsis export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynopsisLength {
    Short,
    #[default]
    Standard,
    Long,
}
