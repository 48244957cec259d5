//! Model configuration and request bodies.
//!
//! The host application owns credential loading and prompt text; this
//! module only shapes what goes over the wire.

use serde::{Deserialize, Serialize};

fn default_temperature() -> f32 {
    0.9
}

fn default_max_tokens() -> u32 {
    900
}

/// Connection and generation parameters for the text service.
#[derive(Clone, Deserialize)]
pub struct ModelConfig {
    /// Chat-completion endpoint URL.
    pub base_url: String,
    /// Bearer credential.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum output length in tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The credential never reaches logs.
        f.debug_struct("ModelConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// One chat message in a request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Message role (`system` or `user`).
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// A system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_owned(),
            content: content.into(),
        }
    }

    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_owned(),
            content: content.into(),
        }
    }
}

/// Serializable chat-completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output length in tokens.
    pub max_tokens: u32,
    /// Whether the response should stream incrementally.
    pub stream: bool,
    /// Conversation messages.
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Build a streaming request from the config's generation parameters.
    pub fn streaming(config: &ModelConfig, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            stream: true,
            messages,
        }
    }

    /// Build a non-streaming request (degrade path and one-shot calls).
    pub fn blocking(config: &ModelConfig, messages: Vec<ChatMessage>) -> Self {
        Self {
            stream: false,
            ..Self::streaming(config, messages)
        }
    }
}
