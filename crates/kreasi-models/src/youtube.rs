//! YouTube metadata optimization request and result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hook::OutputLanguage;
use crate::validation::{require_non_empty, ValidationError};

/// Maximum length of the compacted tag string accepted by YouTube.
pub const MAX_TAGS_LEN: usize = 500;

/// The 10 fixed title formulas; one generated title per formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleFormula {
    BoldStatement,
    HowToTransformation,
    TimeBoundPromise,
    RoutineReveal,
    DisappearTransformation,
    IdentityTransformation,
    ContrarianDeathOf,
    MetaphorFraming,
    FutureFocusedWarning,
    SkillValueDeclaration,
}

impl TitleFormula {
    pub const ALL: &'static [TitleFormula] = &[
        TitleFormula::BoldStatement,
        TitleFormula::HowToTransformation,
        TitleFormula::TimeBoundPromise,
        TitleFormula::RoutineReveal,
        TitleFormula::DisappearTransformation,
        TitleFormula::IdentityTransformation,
        TitleFormula::ContrarianDeathOf,
        TitleFormula::MetaphorFraming,
        TitleFormula::FutureFocusedWarning,
        TitleFormula::SkillValueDeclaration,
    ];

    /// Formula name as enumerated in the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleFormula::BoldStatement => "Bold Statement + Supporting Detail",
            TitleFormula::HowToTransformation => "How-To Transformation",
            TitleFormula::TimeBoundPromise => "Time-Bound Promise",
            TitleFormula::RoutineReveal => "Routine/System Reveal",
            TitleFormula::DisappearTransformation => "Disappear/Transformation",
            TitleFormula::IdentityTransformation => "Identity Transformation",
            TitleFormula::ContrarianDeathOf => "Contrarian/Death Of",
            TitleFormula::MetaphorFraming => "Metaphor/Unique Framing",
            TitleFormula::FutureFocusedWarning => "Future-Focused Warning",
            TitleFormula::SkillValueDeclaration => "Skill/Value Declaration",
        }
    }
}

impl fmt::Display for TitleFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Form input for YouTube metadata optimization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoutubeOptimizationRequest {
    pub content_input: String,
    pub output_language: OutputLanguage,
}

impl YoutubeOptimizationRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("content_input", &self.content_input)
    }
}

/// Hashtags in three reach tiers (specific, broad, viral).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoutubeHashtags {
    pub tier1: Vec<String>,
    pub tier2: Vec<String>,
    pub tier3: Vec<String>,
}

/// Normalized YouTube optimization result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeOptimization {
    pub analysis: String,
    /// Exactly one title per [`TitleFormula`].
    pub titles: Vec<String>,
    pub title_strategy: String,
    pub description: String,
    pub hashtags: YoutubeHashtags,
    /// Comma-joined tag string, at most [`MAX_TAGS_LEN`] characters.
    pub tags: String,
}

/// Compact candidate tags into a single ", "-joined string.
///
/// Tags are taken in order; the first tag whose addition would push the
/// string past [`MAX_TAGS_LEN`] stops the loop, so the result never exceeds
/// the limit and never ends mid-tag.
pub fn compile_tags(candidates: &[String]) -> String {
    let mut compiled = String::new();
    for tag in candidates {
        let added_len = if compiled.is_empty() {
            tag.len()
        } else {
            compiled.len() + 2 + tag.len()
        };
        if added_len > MAX_TAGS_LEN {
            break;
        }
        if !compiled.is_empty() {
            compiled.push_str(", ");
        }
        compiled.push_str(tag);
    }
    compiled
}
