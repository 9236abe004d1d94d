//! Typed manuscript API
//!
//! Thin layer over a [`RequestGateway`]: builds endpoint paths, serializes
//! payloads and deserializes responses into the records in [`crate::types`].
//! All failures keep the gateway's single [`ApiError`] contract.

use crate::ai::AiTool;
use crate::error::ApiError;
use crate::gateway::{Method, RequestGateway};
use crate::types::{
    Acknowledgement, AiResult, Chapter, ChapterUpdate, Character, CharacterUpdate, NewChapter,
    NewCharacter, NewProject, NewResearchNote, NewScene, Project, ProjectUpdate, ResearchNote,
    ResearchNoteUpdate, Revision, Scene, SceneUpdate, SubmissionPacket, SynopsisLength,
};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Typed client for the manuscript server
#[derive(Clone)]
pub struct ManuscriptApi {
    gateway: Arc<dyn RequestGateway>,
}

impl std::fmt::Debug for ManuscriptApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManuscriptApi").finish_non_exhaustive()
    }
}

impl ManuscriptApi {
    pub fn new(gateway: Arc<dyn RequestGateway>) -> Self {
        Self { gateway }
    }

    /// The underlying gateway, for raw calls
    pub fn gateway(&self) -> &Arc<dyn RequestGateway> {
        &self.gateway
    }

    async fn request<T: DeserializeOwned>(
        &self,
        url: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let value = self.gateway.call(url, method, body).await?;
        serde_json::from_value(value).map_err(|e| {
            ApiError::request_failed(format!("Unexpected response from {}: {}", url, e))
        })
    }

    // === Projects ===

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.request("/api/projects", Method::Get, None).await
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        debug!("Creating project '{}'", project.title);
        self.request("/api/projects", Method::Post, Some(to_body(project)?))
            .await
    }

    /// Fetch a project including its chapters
    pub async fn get_project(&self, project_id: u64) -> Result<Project, ApiError> {
        self.request(&format!("/api/projects/{}", project_id), Method::Get, None)
            .await
    }

    pub async fn update_project(
        &self,
        project_id: u64,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        self.request(
            &format!("/api/projects/{}", project_id),
            Method::Put,
            Some(to_body(update)?),
        )
        .await
    }

    pub async fn delete_project(&self, project_id: u64) -> Result<Acknowledgement, ApiError> {
        self.request(&format!("/api/projects/{}", project_id), Method::Delete, None)
            .await
    }

    // === Chapters ===

    pub async fn list_chapters(&self, project_id: u64) -> Result<Vec<Chapter>, ApiError> {
        self.request(
            &format!("/api/projects/{}/chapters", project_id),
            Method::Get,
            None,
        )
        .await
    }

    pub async fn create_chapter(
        &self,
        project_id: u64,
        chapter: &NewChapter,
    ) -> Result<Chapter, ApiError> {
        self.request(
            &format!("/api/projects/{}/chapters", project_id),
            Method::Post,
            Some(to_body(chapter)?),
        )
        .await
    }

    /// Fetch a chapter including its scenes
    pub async fn get_chapter(&self, chapter_id: u64) -> Result<Chapter, ApiError> {
        self.request(&format!("/api/chapters/{}", chapter_id), Method::Get, None)
            .await
    }

    pub async fn update_chapter(
        &self,
        chapter_id: u64,
        update: &ChapterUpdate,
    ) -> Result<Chapter, ApiError> {
        self.request(
            &format!("/api/chapters/{}", chapter_id),
            Method::Put,
            Some(to_body(update)?),
        )
        .await
    }

    pub async fn delete_chapter(&self, chapter_id: u64) -> Result<Acknowledgement, ApiError> {
        self.request(&format!("/api/chapters/{}", chapter_id), Method::Delete, None)
            .await
    }

    // === Scenes ===

    pub async fn create_scene(&self, chapter_id: u64, scene: &NewScene) -> Result<Scene, ApiError> {
        self.request(
            &format!("/api/chapters/{}/scenes", chapter_id),
            Method::Post,
            Some(to_body(scene)?),
        )
        .await
    }

    pub async fn update_scene(
        &self,
        scene_id: u64,
        update: &SceneUpdate,
    ) -> Result<Scene, ApiError> {
        self.request(
            &format!("/api/scenes/{}", scene_id),
            Method::Put,
            Some(to_body(update)?),
        )
        .await
    }

    pub async fn delete_scene(&self, scene_id: u64) -> Result<Acknowledgement, ApiError> {
        self.request(&format!("/api/scenes/{}", scene_id), Method::Delete, None)
            .await
    }

    // === Characters ===

    pub async fn list_characters(&self, project_id: u64) -> Result<Vec<Character>, ApiError> {
        self.request(
            &format!("/api/projects/{}/characters", project_id),
            Method::Get,
            None,
        )
        .await
    }

    pub async fn create_character(
        &self,
        project_id: u64,
        character: &NewCharacter,
    ) -> Result<Character, ApiError> {
        self.request(
            &format!("/api/projects/{}/characters", project_id),
            Method::Post,
            Some(to_body(character)?),
        )
        .await
    }

    pub async fn update_character(
        &self,
        character_id: u64,
        update: &CharacterUpdate,
    ) -> Result<Character, ApiError> {
        self.request(
            &format!("/api/characters/{}", character_id),
            Method::Put,
            Some(to_body(update)?),
        )
        .await
    }

    pub async fn delete_character(&self, character_id: u64) -> Result<Acknowledgement, ApiError> {
        self.request(
            &format!("/api/characters/{}", character_id),
            Method::Delete,
            None,
        )
        .await
    }

    // === Research notes ===

    /// Research notes, newest first
    pub async fn list_research_notes(
        &self,
        project_id: u64,
    ) -> Result<Vec<ResearchNote>, ApiError> {
        self.request(
            &format!("/api/projects/{}/research", project_id),
            Method::Get,
            None,
        )
        .await
    }

    pub async fn create_research_note(
        &self,
        project_id: u64,
        note: &NewResearchNote,
    ) -> Result<ResearchNote, ApiError> {
        self.request(
            &format!("/api/projects/{}/research", project_id),
            Method::Post,
            Some(to_body(note)?),
        )
        .await
    }

    pub async fn update_research_note(
        &self,
        note_id: u64,
        update: &ResearchNoteUpdate,
    ) -> Result<ResearchNote, ApiError> {
        self.request(
            &format!("/api/research/{}", note_id),
            Method::Put,
            Some(to_body(update)?),
        )
        .await
    }

    pub async fn delete_research_note(&self, note_id: u64) -> Result<Acknowledgement, ApiError> {
        self.request(&format!("/api/research/{}", note_id), Method::Delete, None)
            .await
    }

    // === Revisions ===

    /// The latest revisions of a project (the server caps the list at 50), newest first
    pub async fn list_revisions(&self, project_id: u64) -> Result<Vec<Revision>, ApiError> {
        self.request(
            &format!("/api/projects/{}/revisions", project_id),
            Method::Get,
            None,
        )
        .await
    }

    // === AI tools ===

    /// Run an AI tool on `input`, merging `extras` into the payload
    ///
    /// Fails without a request when `extras` lacks a field listed in
    /// [`AiTool::required_extras`].
    pub async fn run_ai_tool(
        &self,
        tool: AiTool,
        input: &str,
        extras: Option<Value>,
    ) -> Result<String, ApiError> {
        if let Some(field) = tool.missing_extra(extras.as_ref()) {
            return Err(ApiError::request_failed(format!(
                "{} needs '{}'",
                tool.label(),
                field
            )));
        }
        debug!("Running AI tool: {}", tool.label());
        let result: AiResult = self
            .request(tool.path(), Method::Post, Some(tool.payload(input, extras)))
            .await?;
        Ok(result.result)
    }

    /// Continuity check across every chapter of a stored project
    pub async fn check_project_continuity(&self, project_id: u64) -> Result<String, ApiError> {
        let result: AiResult = self
            .request(
                AiTool::ContinuityCheck.path(),
                Method::Post,
                Some(json!({ "project_id": project_id })),
            )
            .await?;
        Ok(result.result)
    }

    // === Exports ===

    pub async fn query_letter(&self, project_id: u64) -> Result<String, ApiError> {
        let result: AiResult = self
            .request(
                &format!("/api/projects/{}/export/query-letter", project_id),
                Method::Post,
                Some(json!({})),
            )
            .await?;
        Ok(result.result)
    }

    pub async fn synopsis(
        &self,
        project_id: u64,
        length: SynopsisLength,
    ) -> Result<String, ApiError> {
        let result: AiResult = self
            .request(
                &format!("/api/projects/{}/export/synopsis", project_id),
                Method::Post,
                Some(json!({ "length": length })),
            )
            .await?;
        Ok(result.result)
    }

    pub async fn submission_packet(&self, project_id: u64) -> Result<SubmissionPacket, ApiError> {
        self.request(
            &format!("/api/projects/{}/export/submission-packet", project_id),
            Method::Post,
            Some(json!({})),
        )
        .await
    }
}

fn to_body<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload)
        .map_err(|e| ApiError::request_failed(format!("Failed to encode request: {}", e)))
}
