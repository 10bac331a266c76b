use crate::core::{Chatbot, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

pub const DEFAULT_CHATBOT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_CHATBOT_MODEL: &str = "RashedAlrushod/Job_Advisory";

/// Shown when the service answers but the reply has no `response` text.
pub const FALLBACK_REPLY: &str = "Sorry, I could not process your request.";
pub const ERROR_REPLY_PREFIX: &str = "Error communicating with the chatbot";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Forwards prompts to a generate-style inference endpoint, one request per
/// prompt. No timeout or retry is applied.
#[derive(Debug, Clone)]
pub struct ChatbotRelay {
    client: Client,
    endpoint: String,
    model: String,
}

impl ChatbotRelay {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.chatbot_endpoint(), config.chatbot_model())
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let payload = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        tracing::debug!("Sending prompt ({} chars) to {}", prompt.len(), self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Chatbot response status: {}", response.status());
        let body: serde_json::Value = response.json().await?;
        Ok(reply_text(&body))
    }
}

/// `response` as text; missing or null falls back, other JSON values are
/// rendered as JSON.
fn reply_text(body: &serde_json::Value) -> String {
    match body.get("response") {
        Some(serde_json::Value::String(text)) => text.clone(),
        None | Some(serde_json::Value::Null) => {
            tracing::warn!("Chatbot reply has no 'response' field");
            FALLBACK_REPLY.to_string()
        }
        Some(other) => other.to_string(),
    }
}

#[async_trait]
impl Chatbot for ChatbotRelay {
    async fn respond(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Chatbot request to {} failed: {}", self.endpoint, e);
                format!("{}: {}", ERROR_REPLY_PREFIX, error_detail(&e))
            }
        }
    }
}

/// The error and its source chain, so transport causes such as
/// "connection refused" stay visible.
fn error_detail(err: &(dyn std::error::Error + 'static)) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !detail.contains(&text) {
            detail.push_str(": ");
            detail.push_str(&text);
        }
        source = cause.source();
    }
    detail
}
