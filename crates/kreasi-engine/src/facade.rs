//! The `ContentEngine` request facade.
//!
//! One method per generation feature, each following the same pipeline:
//! validate the request, resolve provider and credential, build the prompt,
//! dispatch with retries, normalize the response. Callers never touch
//! provider clients or raw payloads.

use futures::future::join_all;
use tracing::{info, warn};

use kreasi_models::{
    ApiSettings, FormulaScriptRequest, GeneratedScript, HookRequest, HookSet, Idea, IdeaRequest,
    PromptExpansionRequest, ScriptFromIdeaRequest, ThumbnailBatch, ThumbnailRequest,
    ThumbnailVariation, YoutubeOptimization, YoutubeOptimizationRequest,
};

use crate::config::{resolve_provider, EngineConfig, ResolvedProvider};
use crate::error::{EngineError, EngineResult};
use crate::normalize;
use crate::prompts::{self, PromptSpec};
use crate::provider::{GeminiClient, GroqClient, ProviderClient, ProviderKind};
use crate::retry::{retry_generation, RetryPolicy};

/// Entry point for all generation features.
#[derive(Debug, Clone)]
pub struct ContentEngine {
    settings: ApiSettings,
    config: EngineConfig,
    http: reqwest::Client,
}

impl ContentEngine {
    pub fn new(settings: ApiSettings, config: EngineConfig) -> EngineResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| EngineError::config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            settings,
            config,
            http,
        })
    }

    fn client_for(&self, resolved: &ResolvedProvider) -> ProviderClient {
        match resolved.kind {
            ProviderKind::Gemini => ProviderClient::Gemini(
                GeminiClient::new(self.http.clone(), resolved.api_key.clone())
                    .with_base_url(self.config.gemini_base_url.clone()),
            ),
            ProviderKind::Groq => ProviderClient::Groq(
                GroqClient::new(self.http.clone(), resolved.api_key.clone())
                    .with_base_url(self.config.groq_base_url.clone()),
            ),
        }
    }

    /// Dispatch one text generation. The schema-capable provider gets the
    /// full retry treatment with recovery directives; the text-only
    /// provider already compensates through its JSON mode and runs
    /// single-shot.
    async fn dispatch_text(
        &self,
        resolved: &ResolvedProvider,
        spec: &PromptSpec,
        operation: &str,
    ) -> EngineResult<String> {
        let client = self.client_for(resolved);
        match &client {
            ProviderClient::Gemini(_) => {
                let policy = RetryPolicy::new(operation, resolved.kind);
                retry_generation(&policy, |recovering| {
                    let spec = if recovering {
                        spec.with_recovery_directive()
                    } else {
                        spec.clone()
                    };
                    let client = client.clone();
                    async move { client.generate_text(&spec).await }
                })
                .await
            }
            ProviderClient::Groq(_) => client.generate_text(spec).await,
        }
    }

    /// Generate a normalized batch of content ideas.
    pub async fn generate_ideas(&self, request: &IdeaRequest) -> EngineResult<Vec<Idea>> {
        request.validate()?;
        let resolved = resolve_provider(&self.settings, &self.config, false)?;
        info!(provider = %resolved.kind, idea_count = request.idea_count, "generating ideas");

        let spec = prompts::ideas::build(request);
        let text = self.dispatch_text(&resolved, &spec, "generate_ideas").await?;
        normalize::normalize_ideas(resolved.kind, &text, &prompts::ideas::response_schema())
    }

    /// Turn one generated idea into a free-text script, in the voice of the
    /// batch it came from.
    pub async fn generate_script_for_idea(
        &self,
        request: &ScriptFromIdeaRequest,
    ) -> EngineResult<String> {
        request.validate()?;
        let resolved = resolve_provider(&self.settings, &self.config, false)?;
        info!(provider = %resolved.kind, idea_id = %request.idea.id, "generating script for idea");

        let spec = prompts::script::build_from_idea(request);
        let text = self
            .dispatch_text(&resolved, &spec, "generate_script_for_idea")
            .await?;
        normalize::normalize_text(resolved.kind, &text)
    }

    /// Generate one hook pair per framework.
    pub async fn generate_hooks(&self, request: &HookRequest) -> EngineResult<HookSet> {
        request.validate()?;
        let resolved = resolve_provider(&self.settings, &self.config, false)?;
        info!(provider = %resolved.kind, "generating hooks");

        let spec = prompts::hooks::build(request);
        let text = self.dispatch_text(&resolved, &spec, "generate_hooks").await?;
        let hooks =
            normalize::normalize_hooks(resolved.kind, &text, &prompts::hooks::response_schema())?;
        Ok(HookSet { hooks })
    }

    /// Generate a structured script following the requested formula.
    pub async fn generate_formula_script(
        &self,
        request: &FormulaScriptRequest,
    ) -> EngineResult<GeneratedScript> {
        request.validate()?;
        let resolved = resolve_provider(&self.settings, &self.config, false)?;
        info!(provider = %resolved.kind, formula = %request.formula, "generating formula script");

        let spec = prompts::script::build_formula(request);
        let text = self
            .dispatch_text(&resolved, &spec, "generate_formula_script")
            .await?;
        normalize::normalize_script(
            resolved.kind,
            &text,
            &prompts::script::formula_response_schema(),
            request.formula,
        )
    }

    /// Expand a rough user idea into a structured prompt.
    pub async fn expand_prompt(&self, request: &PromptExpansionRequest) -> EngineResult<String> {
        request.validate()?;
        let resolved = resolve_provider(&self.settings, &self.config, false)?;
        info!(provider = %resolved.kind, "expanding prompt");

        let spec = prompts::prompt_expansion::build(request);
        let text = self.dispatch_text(&resolved, &spec, "expand_prompt").await?;
        normalize::normalize_text(resolved.kind, &text)
    }

    /// Generate the full YouTube metadata set for a piece of content.
    pub async fn optimize_youtube(
        &self,
        request: &YoutubeOptimizationRequest,
    ) -> EngineResult<YoutubeOptimization> {
        request.validate()?;
        let resolved = resolve_provider(&self.settings, &self.config, false)?;
        info!(provider = %resolved.kind, "optimizing youtube metadata");

        let spec = prompts::youtube::build(request);
        let text = self
            .dispatch_text(&resolved, &spec, "optimize_youtube")
            .await?;
        normalize::normalize_youtube(resolved.kind, &text, &prompts::youtube::response_schema())
    }

    /// Generate the three-variation thumbnail batch.
    ///
    /// Variations run concurrently and fail independently; the batch
    /// succeeds with whatever subset came back, and fails only when every
    /// variation failed. Image calls are single-attempt.
    pub async fn generate_thumbnails(
        &self,
        request: &ThumbnailRequest,
    ) -> EngineResult<ThumbnailBatch> {
        request.validate()?;
        let resolved = resolve_provider(&self.settings, &self.config, true)?;
        if !resolved.kind.supports_images() {
            return Err(EngineError::ImageUnsupported {
                provider: resolved.kind,
            });
        }
        let client = GeminiClient::new(self.http.clone(), resolved.api_key.clone())
            .with_base_url(self.config.gemini_base_url.clone());
        info!(
            provider = %resolved.kind,
            substituted = resolved.substituted,
            orientation = %request.orientation,
            "generating thumbnails"
        );

        let tasks = ThumbnailVariation::ALL.iter().map(|&variation| {
            let client = client.clone();
            let prompt = prompts::thumbnail::build_image_prompt(request, variation);
            let reference = request.reference_image_data().map(str::to_string);
            let aspect_ratio = request.orientation.aspect_ratio();
            async move {
                client
                    .generate_image(&prompt, reference.as_deref(), aspect_ratio)
                    .await
                    .map_err(|err| (variation, err))
            }
        });

        let images: Vec<String> = join_all(tasks)
            .await
            .into_iter()
            .filter_map(|result| match result {
                Ok(image) => Some(image),
                Err((variation, err)) => {
                    warn!(?variation, error = %err, "thumbnail variation failed");
                    None
                }
            })
            .collect();

        if images.is_empty() {
            return Err(EngineError::AllVariationsFailed);
        }
        Ok(ThumbnailBatch {
            images,
            provider_substituted: resolved.substituted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_builds_with_defaults() {
        let engine = ContentEngine::new(ApiSettings::default(), EngineConfig::default());
        assert!(engine.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_request_fails_before_any_resolution() {
        // No app key configured, but validation must reject first.
        let engine =
            ContentEngine::new(ApiSettings::default(), EngineConfig::default()).unwrap();
        let err = engine.generate_ideas(&IdeaRequest::default()).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidRequest(_)));
    }
}
