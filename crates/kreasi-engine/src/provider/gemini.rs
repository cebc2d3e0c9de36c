//! Gemini API client.
//!
//! The schema-capable, multimodal provider: structured output is enforced
//! natively through `responseSchema`, and image generation runs against a
//! separate model with multipart contents.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::prompts::PromptSpec;
use crate::provider::ProviderKind;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for text/JSON generation.
pub const TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Model used for image generation.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: Client,
}

/// Gemini API request.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline_image(mime_type: &str, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(rename = "thinkingConfig", skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
    #[serde(rename = "imageConfig", skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
struct ThinkingConfig {
    #[serde(rename = "thinkingBudget")]
    thinking_budget: u32,
}

#[derive(Debug, Serialize)]
struct ImageConfig {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
}

/// Gemini API response.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<ResponseInlineData>,
}

#[derive(Debug, Deserialize)]
struct ResponseInlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

impl GeminiClient {
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

    /// Generate text (or schema-constrained JSON) from a prompt spec.
    pub async fn generate_text(&self, spec: &PromptSpec) -> EngineResult<String> {
        let generation_config = if spec.schema.is_some() || spec.thinking_budget.is_some() {
            Some(GenerationConfig {
                response_mime_type: spec
                    .schema
                    .as_ref()
                    .map(|_| "application/json".to_string()),
                response_schema: spec.schema.as_ref().map(|s| s.to_provider_json()),
                thinking_config: spec
                    .thinking_budget
                    .map(|budget| ThinkingConfig {
                        thinking_budget: budget,
                    }),
                image_config: None,
            })
        } else {
            None
        };

        let request = GeminiRequest {
            system_instruction: if spec.system_instruction.is_empty() {
                None
            } else {
                Some(Content {
                    parts: vec![Part::text(&spec.system_instruction)],
                })
            },
            contents: vec![Content {
                parts: vec![Part::text(&spec.user_prompt)],
            }],
            generation_config,
        };

        let response = self.post(TEXT_MODEL, &request).await?;
        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.text.as_deref()))
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                EngineError::provider(ProviderKind::Gemini, "no content in Gemini response")
            })?;
        Ok(text.to_string())
    }

    /// Generate one image and return it as a data URI.
    ///
    /// `reference_image` is a raw base64 JPEG payload whose subject should
    /// appear in the output.
    pub async fn generate_image(
        &self,
        prompt: &str,
        reference_image: Option<&str>,
        aspect_ratio: &str,
    ) -> EngineResult<String> {
        let mut parts = Vec::new();
        if let Some(data) = reference_image {
            parts.push(Part::inline_image("image/jpeg", data));
        }
        parts.push(Part::text(prompt));

        let request = GeminiRequest {
            system_instruction: None,
            contents: vec![Content { parts }],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                }),
                ..Default::default()
            }),
        };

        let response = self.post(IMAGE_MODEL, &request).await?;
        let image = response
            .candidates
            .first()
            .and_then(|c| {
                c.content
                    .parts
                    .iter()
                    .find_map(|p| p.inline_data.as_ref())
            })
            .ok_or_else(|| {
                EngineError::invalid_response(
                    ProviderKind::Gemini,
                    "no image part in Gemini response",
                )
            })?;
        Ok(format!(
            "data:{};base64,{}",
            image.mime_type, image.data
        ))
    }

    async fn post(&self, model: &str, request: &GeminiRequest) -> EngineResult<GeminiResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        debug!(model, "calling Gemini API");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                EngineError::provider(
                    ProviderKind::Gemini,
                    format!("Gemini API request failed: {}", e),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(EngineError::provider(
                ProviderKind::Gemini,
                format!("Gemini API returned {}: {}", status, error_text),
            ));
        }

        response.json().await.map_err(|e| {
            EngineError::provider(
                ProviderKind::Gemini,
                format!("failed to read Gemini response body: {}", e),
            )
        })
    }
}
