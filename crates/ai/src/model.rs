use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum Model {
    ClaudeSonnet,
    GeminiFlash,
}

impl Model {
    pub fn name(&self) -> &str {
        match self {
            Model::ClaudeSonnet => "claude-sonnet-4",
            Model::GeminiFlash => "gemini-3-flash-preview",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Serialize, Debug, Clone)]
pub(crate) struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

#[derive(Serialize)]
pub(crate) struct RequestPayload {
    pub(crate) message: String,
    pub(crate) api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) history: Option<Vec<HistoryEntry>>,
    /// Base64-encoded JPEG for image classification requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) image: Option<String>,
}

impl Debug for RequestPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPayload")
            .field("message", &self.message)
            .field("history", &self.history)
            .field("has_image", &self.image.is_some())
            .finish()
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct ResponsePayload {
    pub(crate) is_success: bool,
    pub(crate) response: Option<String>,
    pub(crate) error_message: Option<String>,
}

/// Chat history carried across turns of one conversation.
#[derive(Default, Clone, Debug)]
pub struct Context {
    pub(crate) history: Vec<HistoryEntry>,
}

impl Context {
    pub fn add_system_message(&mut self, message: String) {
        self.history.push(HistoryEntry {
            role: Role::System,
            content: message,
        });
    }

    pub fn add_user_message(&mut self, message: String) {
        self.history.push(HistoryEntry {
            role: Role::User,
            content: message,
        });
    }

    pub fn add_assistant_message(&mut self, message: String) {
        self.history.push(HistoryEntry {
            role: Role::Assistant,
            content: message,
        });
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl From<Context> for Vec<HistoryEntry> {
    fn from(ctx: Context) -> Self {
        ctx.history
    }
}

/// Bristol stool scale classification of one photo.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoolAnalysis {
    #[serde(rename = "type")]
    pub bristol_type: u8,
    pub insight: String,
    pub recommendation: String,
}
