//! Engine error types.
//!
//! `Display` carries diagnostic detail for logs; [`EngineError::user_message`]
//! returns the localized string a UI may show the end user. Raw provider
//! payloads are never part of either.

use thiserror::Error;

use kreasi_models::ValidationError;

use crate::provider::ProviderKind;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// No usable credential for the requested operation. Fatal, not retried.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request failed validation before any network call.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// Transport failure or non-success provider response.
    #[error("{provider} request failed: {message}")]
    Provider {
        provider: ProviderKind,
        message: String,
    },

    /// The provider answered but the payload is unusable (parse failure,
    /// missing field, wrong cardinality). Not retried.
    #[error("{provider} returned an unusable response: {message}")]
    InvalidResponse {
        provider: ProviderKind,
        message: String,
    },

    /// An image operation was routed at a provider that cannot produce
    /// images. Caught before dispatch.
    #[error("{provider} cannot generate images")]
    ImageUnsupported { provider: ProviderKind },

    /// All retry attempts failed.
    #[error("{provider} failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        provider: ProviderKind,
        attempts: u32,
        last: String,
    },

    /// Every thumbnail variation in the batch failed.
    #[error("all thumbnail variations failed")]
    AllVariationsFailed,
}

impl EngineError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn provider(provider: ProviderKind, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider,
            message: msg.into(),
        }
    }

    pub fn invalid_response(provider: ProviderKind, msg: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider,
            message: msg.into(),
        }
    }

    /// Whether the retry orchestrator may reissue the failed call.
    ///
    /// Only transport/provider failures qualify; a syntactically successful
    /// call with an unusable payload is never retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Provider { .. })
    }

    /// Localized, user-facing message. Distinct from the diagnostic
    /// `Display` output and free of internal detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            EngineError::Config(_) => {
                "API Key tidak ditemukan. Harap atur penyedia AI di Pengaturan."
            }
            EngineError::InvalidRequest(_) => {
                "Form belum lengkap. Periksa kembali isian yang wajib diisi."
            }
            EngineError::Provider { .. } | EngineError::RetriesExhausted { .. } => {
                "Gagal menghubungi layanan AI. Silakan coba lagi."
            }
            EngineError::InvalidResponse { .. } => "Gagal memproses respons JSON dari AI.",
            EngineError::ImageUnsupported { .. } => {
                "Groq API tidak mendukung pembuatan gambar. Harap ubah ke 'App API' atau 'Gemini API' di Pengaturan."
            }
            EngineError::AllVariationsFailed => "Gagal menghasilkan semua gambar thumbnail.",
        }
    }
}
