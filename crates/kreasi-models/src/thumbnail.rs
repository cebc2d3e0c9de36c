//! Thumbnail generation request and result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hook::OutputLanguage;
use crate::validation::{require_custom_value, require_non_empty, ValidationError};

/// Thumbnail orientation, mapped to aspect ratio and target resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailOrientation {
    /// 16:9 for YouTube long-form
    #[default]
    Horizontal,
    /// 9:16 for Shorts/Reels/TikTok
    Vertical,
}

impl ThumbnailOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailOrientation::Horizontal => "horizontal",
            ThumbnailOrientation::Vertical => "vertical",
        }
    }

    pub fn aspect_ratio(&self) -> &'static str {
        match self {
            ThumbnailOrientation::Horizontal => "16:9",
            ThumbnailOrientation::Vertical => "9:16",
        }
    }

    pub fn resolution(&self) -> &'static str {
        match self {
            ThumbnailOrientation::Horizontal => "1280x720",
            ThumbnailOrientation::Vertical => "1080x1920",
        }
    }
}

impl fmt::Display for ThumbnailOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual style of the thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailStyle {
    #[default]
    Minimalist,
    Mrbeast,
    Cinematic,
    Futuristic,
    Vlog,
    Horror,
    Anime,
    Cartoon,
    Luxury,
    Documentary,
    Gaming,
    Others,
}

impl ThumbnailStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailStyle::Minimalist => "minimalist",
            ThumbnailStyle::Mrbeast => "mrbeast",
            ThumbnailStyle::Cinematic => "cinematic",
            ThumbnailStyle::Futuristic => "futuristic",
            ThumbnailStyle::Vlog => "vlog",
            ThumbnailStyle::Horror => "horror",
            ThumbnailStyle::Anime => "anime",
            ThumbnailStyle::Cartoon => "cartoon",
            ThumbnailStyle::Luxury => "luxury",
            ThumbnailStyle::Documentary => "documentary",
            ThumbnailStyle::Gaming => "gaming",
            ThumbnailStyle::Others => "others",
        }
    }
}

impl fmt::Display for ThumbnailStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three fixed compositional variations in a thumbnail batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailVariation {
    EmotionalCloseUp,
    DynamicAction,
    MinimalistContrast,
}

impl ThumbnailVariation {
    pub const ALL: &'static [ThumbnailVariation] = &[
        ThumbnailVariation::EmotionalCloseUp,
        ThumbnailVariation::DynamicAction,
        ThumbnailVariation::MinimalistContrast,
    ];

    /// Compositional directive injected into the image prompt.
    pub fn directive(&self) -> &'static str {
        match self {
            ThumbnailVariation::EmotionalCloseUp => {
                "Focus on a close-up, highly emotional expression or focal point."
            }
            ThumbnailVariation::DynamicAction => {
                "Focus on an action shot or dynamic composition with strong movement."
            }
            ThumbnailVariation::MinimalistContrast => {
                "Focus on a high-contrast, artistic or minimalist composition."
            }
        }
    }
}

/// Form input for a thumbnail batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThumbnailRequest {
    pub orientation: ThumbnailOrientation,
    pub style: ThumbnailStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_other: Option<String>,
    pub description: String,
    /// Base64 reference image (optionally a full data URI) whose subject
    /// should appear in the thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image: Option<String>,
    pub include_text: bool,
    pub language: OutputLanguage,
}

impl ThumbnailRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_custom_value(
            "style",
            self.style == ThumbnailStyle::Others,
            self.style_other.as_deref(),
        )?;
        require_non_empty("description", &self.description)
    }

    /// Resolved style text, never the `others` sentinel.
    pub fn style_text(&self) -> &str {
        match self.style {
            ThumbnailStyle::Others => self.style_other.as_deref().unwrap_or_default(),
            other => other.as_str(),
        }
    }

    /// Raw base64 payload of the reference image, data-URI prefix stripped.
    pub fn reference_image_data(&self) -> Option<&str> {
        self.reference_image.as_deref().map(|raw| {
            raw.split_once(',').map(|(_, data)| data).unwrap_or(raw)
        })
    }
}

/// Result of a thumbnail batch: 0-3 data-URI images, one per variation
/// that succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailBatch {
    pub images: Vec<String>,
    /// True when the configured text-only provider was replaced with the
    /// image-capable one to satisfy the request.
    #[serde(default)]
    pub provider_substituted: bool,
}
