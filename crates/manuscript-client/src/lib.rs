//! Manuscript server client
//!
//! This crate provides the request gateway every caller uses to talk to the
//! manuscript server, plus a typed API on top of it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              ManuscriptApi                       │
//! │  - projects / chapters / scenes CRUD             │
//! │  - characters, research notes, revisions         │
//! │  - AI tools (/api/ai/*)                          │
//! │  - text exports                                  │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────────────────────────────────────┐
//! │           RequestGateway trait                   │
//! │  call(url, method, body) -> JSON | RequestFailed │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!               ┌─────────────────┐
//!               │  HttpGateway    │
//!               │  (reqwest)      │
//!               └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use manuscript_client::{HttpGateway, ManuscriptApi, Method, RequestGateway};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), manuscript_client::ApiError> {
//! let gateway = Arc::new(HttpGateway::new("http://127.0.0.1:5000")?);
//!
//! // Raw JSON call
//! let created = gateway
//!     .call("/api/projects", Method::Post, Some(json!({ "title": "Draft One" })))
//!     .await?;
//!
//! // Typed API over the same gateway
//! let api = ManuscriptApi::new(gateway);
//! let projects = api.list_projects().await?;
//! # Ok(())
//! # }
//! ```

pub mod ai;
pub mod api;
pub mod error;
pub mod gateway;
pub mod markup;
pub mod types;

/// Server address used when nothing is configured
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

pub use ai::AiTool;
pub use api::ManuscriptApi;
pub use error::ApiError;
pub use gateway::{HttpGateway, Method, RequestGateway};
pub use markup::escape_for_display;
pub use types::{
    Acknowledgement, AiResult, Chapter, ChapterUpdate, Character, CharacterUpdate, NewChapter,
    NewCharacter, NewProject, NewResearchNote, NewScene, PacketFile, Project, ProjectUpdate,
    ResearchNote, ResearchNoteUpdate, Revision, Scene, SceneUpdate, SubmissionPacket,
    SynopsisLength,
};
