//! Provider adapters behind one closed dispatch.
//!
//! Provider selection happens once, in the config resolver; feature logic
//! only ever sees [`ProviderClient`] and never branches on provider names.

pub mod gemini;
pub mod groq;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use gemini::GeminiClient;
pub use groq::GroqClient;

use crate::error::EngineResult;
use crate::prompts::PromptSpec;

/// The two backing providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Schema-capable, multimodal
    Gemini,
    /// Text-only chat completions
    Groq,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Groq => "groq",
        }
    }

    /// Whether this provider can produce images at all.
    pub fn supports_images(&self) -> bool {
        matches!(self, ProviderKind::Gemini)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved, ready-to-call provider adapter.
#[derive(Debug, Clone)]
pub enum ProviderClient {
    Gemini(GeminiClient),
    Groq(GroqClient),
}

impl ProviderClient {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderClient::Gemini(_) => ProviderKind::Gemini,
            ProviderClient::Groq(_) => ProviderKind::Groq,
        }
    }

    pub fn supports_images(&self) -> bool {
        self.kind().supports_images()
    }

    /// Run one text generation call. No internal retries; failures surface
    /// as typed errors for the orchestrator to act on.
    pub async fn generate_text(&self, spec: &PromptSpec) -> EngineResult<String> {
        match self {
            ProviderClient::Gemini(client) => client.generate_text(spec).await,
            ProviderClient::Groq(client) => client.generate_text(spec).await,
        }
    }
}
