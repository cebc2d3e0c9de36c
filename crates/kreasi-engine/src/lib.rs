//! Provider abstraction and response normalization for KreasiKit.
//!
//! This crate provides:
//! - Credential/provider resolution with image-capability fallback
//! - Prompt builders for every generation feature
//! - Provider adapters (Gemini REST, Groq chat completions)
//! - Retry orchestration with recovery directives
//! - Normalization of provider output into `kreasi-models` types
//! - The `ContentEngine` request facade

pub mod config;
pub mod error;
pub mod facade;
pub mod normalize;
pub mod prompts;
pub mod provider;
pub mod retry;

pub use config::{resolve_provider, EngineConfig, ResolvedProvider};
pub use error::{EngineError, EngineResult};
pub use facade::ContentEngine;
pub use prompts::PromptSpec;
pub use provider::{GeminiClient, GroqClient, ProviderClient, ProviderKind};
pub use retry::{retry_generation, RetryPolicy};
