//! Shared data models for the KreasiKit generation core.
//!
//! This crate provides Serde-serializable types for:
//! - Generation requests (ideas, scripts, hooks, YouTube metadata, thumbnails)
//! - Normalized generation results
//! - Fixed taxonomies (hook frameworks, script formulas, title formulas)
//! - The provider-agnostic structured-output schema description
//! - API provider settings

pub mod hook;
pub mod idea;
pub mod prompt;
pub mod schema;
pub mod script;
pub mod settings;
pub mod thumbnail;
pub mod validation;
pub mod youtube;

// Re-export common types
pub use hook::{GeneratedHook, HookFramework, HookRequest, HookSet, OutputLanguage};
pub use idea::{
    AudienceLevel, ContentFormat, ContentGoal, DepthLevel, Idea, IdeaRequest, IdeaScores,
    Industry, ProductionEffort, RiskLevel,
};
pub use prompt::PromptExpansionRequest;
pub use schema::{Schema, SchemaKind, SchemaViolation};
pub use script::{
    AudienceAwareness, FormulaScriptRequest, GeneratedScript, HookVariation, ScriptCta,
    ScriptFormula, ScriptFromIdeaRequest, ScriptGoal, ScriptSection, UserType,
};
pub use settings::{ApiProvider, ApiSettings};
pub use thumbnail::{
    ThumbnailBatch, ThumbnailOrientation, ThumbnailRequest, ThumbnailStyle, ThumbnailVariation,
};
pub use validation::ValidationError;
pub use youtube::{
    compile_tags, TitleFormula, YoutubeHashtags, YoutubeOptimization, YoutubeOptimizationRequest,
};
