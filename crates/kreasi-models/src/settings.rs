//! API provider settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which credential source the user has configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiProvider {
    /// Application-wide default key (Gemini)
    #[default]
    App,
    /// User-supplied Gemini key
    Gemini,
    /// User-supplied Groq key (text only)
    Groq,
}

impl ApiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiProvider::App => "app",
            ApiProvider::Gemini => "gemini",
            ApiProvider::Groq => "groq",
        }
    }
}

impl fmt::Display for ApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiProvider {
    type Err = ApiProviderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "app" => Ok(ApiProvider::App),
            "gemini" => Ok(ApiProvider::Gemini),
            "groq" => Ok(ApiProvider::Groq),
            _ => Err(ApiProviderParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown API provider: {0}")]
pub struct ApiProviderParseError(String);

/// User-configured provider choice plus up to two API keys.
///
/// Owned and persisted by the caller (typically per browser/device); the
/// generation core only ever reads it. Empty key strings are treated the
/// same as absent keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSettings {
    pub provider: ApiProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groq_api_key: Option<String>,
}

impl ApiSettings {
    /// The user's Gemini key, if one is configured and non-blank.
    pub fn gemini_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// The user's Groq key, if one is configured and non-blank.
    pub fn groq_key(&self) -> Option<&str> {
        self.groq_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse() {
        assert_eq!("app".parse::<ApiProvider>().unwrap(), ApiProvider::App);
        assert_eq!("GROQ".parse::<ApiProvider>().unwrap(), ApiProvider::Groq);
        assert!("openai".parse::<ApiProvider>().is_err());
    }

    #[test]
    fn test_settings_roundtrip() {
        let json = r#"{"provider":"gemini","gemini_api_key":"abc"}"#;
        let settings: ApiSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.provider, ApiProvider::Gemini);
        assert_eq!(settings.gemini_key(), Some("abc"));
        assert_eq!(settings.groq_key(), None);
    }

    #[test]
    fn test_blank_key_is_absent() {
        let settings = ApiSettings {
            provider: ApiProvider::Groq,
            gemini_api_key: Some("  ".to_string()),
            groq_api_key: Some(String::new()),
        };
        assert_eq!(settings.gemini_key(), None);
        assert_eq!(settings.groq_key(), None);
    }
}
