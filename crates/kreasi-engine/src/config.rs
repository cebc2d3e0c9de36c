//! Engine configuration and provider/credential resolution.

use std::time::Duration;

use tracing::warn;

use kreasi_models::{ApiProvider, ApiSettings};

use crate::error::{EngineError, EngineResult};
use crate::provider::{gemini, groq, ProviderKind};

/// Engine configuration.
///
/// The application-wide default key backs the `app` provider choice and
/// every fallback path; user settings are carried separately in
/// [`ApiSettings`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Application-wide default Gemini key
    pub app_api_key: Option<String>,
    /// Client-side timeout per provider call
    pub request_timeout: Duration,
    /// Gemini API base URL (overridable for tests)
    pub gemini_base_url: String,
    /// Groq API base URL (overridable for tests)
    pub groq_base_url: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_api_key: None,
            request_timeout: Duration::from_secs(60),
            gemini_base_url: gemini::DEFAULT_BASE_URL.to_string(),
            groq_base_url: groq::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            app_api_key: std::env::var("KREASIKIT_APP_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            request_timeout: Duration::from_secs(
                std::env::var("KREASIKIT_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
            ..Default::default()
        }
    }

    fn app_key(&self) -> Option<&str> {
        self.app_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Outcome of provider/credential resolution for one operation.
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    pub kind: ProviderKind,
    pub api_key: String,
    /// True when the configured provider was replaced because it cannot
    /// serve the requested capability (text-only provider, image op).
    pub substituted: bool,
}

/// Pick the provider and credential for one operation.
///
/// The configured text-only provider is used only for text operations with
/// a key present; image operations and missing keys fall back to the
/// image-capable provider with the user key or the app default. An
/// operation with no usable key at all is a fatal configuration error,
/// never an empty credential on the wire.
pub fn resolve_provider(
    settings: &ApiSettings,
    config: &EngineConfig,
    needs_images: bool,
) -> EngineResult<ResolvedProvider> {
    if settings.provider == ApiProvider::Groq {
        if needs_images {
            warn!("groq cannot generate images, substituting gemini for this request");
            let api_key = effective_gemini_key(settings, config)?;
            return Ok(ResolvedProvider {
                kind: ProviderKind::Gemini,
                api_key,
                substituted: true,
            });
        }
        if let Some(key) = settings.groq_key() {
            return Ok(ResolvedProvider {
                kind: ProviderKind::Groq,
                api_key: key.to_string(),
                substituted: false,
            });
        }
        warn!("groq selected without a key, falling back to gemini");
    }

    let api_key = effective_gemini_key(settings, config)?;
    Ok(ResolvedProvider {
        kind: ProviderKind::Gemini,
        api_key,
        substituted: false,
    })
}

/// The user's custom Gemini key when that provider is selected, otherwise
/// the app-wide default key.
fn effective_gemini_key(settings: &ApiSettings, config: &EngineConfig) -> EngineResult<String> {
    if settings.provider == ApiProvider::Gemini {
        if let Some(key) = settings.gemini_key() {
            return Ok(key.to_string());
        }
    }
    config
        .app_key()
        .map(str::to_string)
        .ok_or_else(|| EngineError::config("no usable Gemini API key configured"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_app_key() -> EngineConfig {
        EngineConfig {
            app_api_key: Some("app-key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_custom_gemini_key_wins() {
        let settings = ApiSettings {
            provider: ApiProvider::Gemini,
            gemini_api_key: Some("user-key".to_string()),
            groq_api_key: None,
        };
        let resolved = resolve_provider(&settings, &config_with_app_key(), false).unwrap();
        assert_eq!(resolved.kind, ProviderKind::Gemini);
        assert_eq!(resolved.api_key, "user-key");
        assert!(!resolved.substituted);
    }

    #[test]
    fn test_app_provider_uses_default_key() {
        let settings = ApiSettings::default();
        let resolved = resolve_provider(&settings, &config_with_app_key(), false).unwrap();
        assert_eq!(resolved.api_key, "app-key");
    }

    #[test]
    fn test_groq_text_operation() {
        let settings = ApiSettings {
            provider: ApiProvider::Groq,
            gemini_api_key: None,
            groq_api_key: Some("groq-key".to_string()),
        };
        let resolved = resolve_provider(&settings, &config_with_app_key(), false).unwrap();
        assert_eq!(resolved.kind, ProviderKind::Groq);
        assert!(!resolved.substituted);
    }

    #[test]
    fn test_groq_image_operation_is_substituted() {
        let settings = ApiSettings {
            provider: ApiProvider::Groq,
            gemini_api_key: None,
            groq_api_key: Some("groq-key".to_string()),
        };
        let resolved = resolve_provider(&settings, &config_with_app_key(), true).unwrap();
        assert_eq!(resolved.kind, ProviderKind::Gemini);
        assert_eq!(resolved.api_key, "app-key");
        assert!(resolved.substituted);
    }

    #[test]
    fn test_groq_without_key_falls_back_to_gemini() {
        let settings = ApiSettings {
            provider: ApiProvider::Groq,
            gemini_api_key: None,
            groq_api_key: None,
        };
        let resolved = resolve_provider(&settings, &config_with_app_key(), false).unwrap();
        assert_eq!(resolved.kind, ProviderKind::Gemini);
        assert!(!resolved.substituted);
    }

    #[test]
    fn test_no_usable_key_is_fatal() {
        let settings = ApiSettings::default();
        let err = resolve_provider(&settings, &EngineConfig::default(), false).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_blank_app_key_does_not_resolve() {
        let config = EngineConfig {
            app_api_key: Some("   ".to_string()),
            ..Default::default()
        };
        let err = resolve_provider(&ApiSettings::default(), &config, false).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
