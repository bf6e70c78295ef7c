use serde::{Deserialize, Serialize};

/// One chat turn as the browser sends it and the provider expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Inbound relay payload. Both fields default so a sparse body is forwarded
/// as-is and the upstream judges validity.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}
