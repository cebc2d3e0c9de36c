//! Groq API client.
//!
//! Text-only chat completions behind an OpenAI-compatible surface. Groq has
//! no native response-schema support, so when a spec carries one the schema
//! is folded into the system message as compact text and JSON mode is
//! requested instead.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::prompts::PromptSpec;
use crate::provider::ProviderKind;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com";

/// Chat model used for all Groq generations.
pub const CHAT_MODEL: &str = "llama3-70b-8192";

const TEMPERATURE: f64 = 0.7;

/// Groq API client.
#[derive(Debug, Clone)]
pub struct GroqClient {
    api_key: String,
    base_url: String,
    client: Client,
}

/// Groq chat completion request.
#[derive(Debug, Serialize)]
struct GroqRequest {
    model: &'static str,
    messages: Vec<Message>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Groq chat completion response.
#[derive(Debug, Deserialize)]
struct GroqResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    error: GroqErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GroqErrorDetail {
    message: String,
}

impl GroqClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Override the API base URL (used by tests against a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run one chat completion for a prompt spec.
    pub async fn generate_text(&self, spec: &PromptSpec) -> EngineResult<String> {
        let mut messages = Vec::with_capacity(2);
        let system_content = match &spec.schema {
            Some(schema) => {
                let mut content = spec.system_instruction.clone();
                if !content.is_empty() {
                    content.push_str("\n\n");
                }
                content.push_str(&format!(
                    "Return valid JSON matching this schema: {}",
                    schema.to_compact_text()
                ));
                Some(content)
            }
            None if spec.system_instruction.is_empty() => None,
            None => Some(spec.system_instruction.clone()),
        };
        if let Some(content) = system_content {
            messages.push(Message {
                role: "system",
                content,
            });
        }
        messages.push(Message {
            role: "user",
            content: spec.user_prompt.clone(),
        });

        let request = GroqRequest {
            model: CHAT_MODEL,
            messages,
            temperature: TEMPERATURE,
            response_format: spec.schema.as_ref().map(|_| ResponseFormat {
                kind: "json_object",
            }),
        };

        let url = format!("{}/openai/v1/chat/completions", self.base_url);
        debug!(model = CHAT_MODEL, "calling Groq API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                EngineError::provider(
                    ProviderKind::Groq,
                    format!("Groq API request failed: {}", e),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<GroqErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            return Err(EngineError::provider(
                ProviderKind::Groq,
                format!("Groq API returned {}: {}", status, detail),
            ));
        }

        let response: GroqResponse = response.json().await.map_err(|e| {
            EngineError::provider(
                ProviderKind::Groq,
                format!("failed to read Groq response body: {}", e),
            )
        })?;

        response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                EngineError::provider(ProviderKind::Groq, "no content in Groq response")
            })
    }
}
