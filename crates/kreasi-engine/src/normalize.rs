//! Response normalization.
//!
//! Raw provider text goes in, domain types come out. Every path strips
//! markdown fences, validates against the feature schema when one exists,
//! and enforces the cardinality rules the prompt asked for. Derived fields
//! (idea ids, total scores, the compacted tag string) are always computed
//! locally rather than trusted from the provider.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use kreasi_models::{
    compile_tags, GeneratedHook, GeneratedScript, HookFramework, Idea, IdeaScores,
    ProductionEffort, Schema, ScriptFormula, TitleFormula, YoutubeHashtags, YoutubeOptimization,
};

use crate::error::{EngineError, EngineResult};
use crate::provider::ProviderKind;

/// Strip a leading/trailing markdown code fence from model output.
///
/// Providers without native JSON mode habitually wrap payloads in
/// ```` ```json ... ``` ```` fences.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip an optional language tag on the opening fence line.
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse provider text as JSON and validate it against `schema` if given.
pub fn parse_json(provider: ProviderKind, text: &str, schema: Option<&Schema>) -> EngineResult<Value> {
    let cleaned = strip_code_fence(text);
    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        debug!(%provider, raw = cleaned, "response is not valid JSON");
        EngineError::invalid_response(provider, format!("response is not valid JSON: {}", e))
    })?;
    if let Some(schema) = schema {
        schema
            .validate(&value)
            .map_err(|violation| EngineError::invalid_response(provider, violation.to_string()))?;
    }
    Ok(value)
}

fn deserialize<T: DeserializeOwned>(provider: ProviderKind, value: Value) -> EngineResult<T> {
    serde_json::from_value(value).map_err(|e| {
        EngineError::invalid_response(provider, format!("response shape mismatch: {}", e))
    })
}

#[derive(Debug, Deserialize)]
struct RawIdeaBatch {
    ideas: Vec<RawIdea>,
}

#[derive(Debug, Deserialize)]
struct RawIdea {
    hooks: Vec<String>,
    summary: String,
    unique_angle: String,
    outline: Vec<String>,
    #[serde(default)]
    cta: String,
    keywords: Vec<String>,
    #[serde(default)]
    hashtags: Vec<String>,
    effort: ProductionEffort,
    scores: IdeaScores,
    #[serde(default)]
    warnings: Vec<String>,
}

/// Normalize an idea batch. Ids are minted locally and every total score is
/// recomputed from the component scores.
pub fn normalize_ideas(
    provider: ProviderKind,
    text: &str,
    schema: &Schema,
) -> EngineResult<Vec<Idea>> {
    let value = parse_json(provider, text, Some(schema))?;
    let batch: RawIdeaBatch = deserialize(provider, value)?;

    let minted_at = Utc::now().timestamp_millis();
    let ideas = batch
        .ideas
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let total_score = raw.scores.total_score();
            Idea {
                id: format!("idea_{}_{}", minted_at, index),
                hooks: raw.hooks,
                summary: raw.summary,
                unique_angle: raw.unique_angle,
                outline: raw.outline,
                cta: raw.cta,
                keywords: raw.keywords,
                hashtags: raw.hashtags,
                effort: raw.effort,
                scores: raw.scores,
                total_score,
                warnings: raw.warnings,
            }
        })
        .collect();
    Ok(ideas)
}

#[derive(Debug, Deserialize)]
struct RawHookSet {
    hooks: Vec<GeneratedHook>,
}

/// Normalize a hook set: exactly one hook per framework, none of them blank.
pub fn normalize_hooks(
    provider: ProviderKind,
    text: &str,
    schema: &Schema,
) -> EngineResult<Vec<GeneratedHook>> {
    let value = parse_json(provider, text, Some(schema))?;
    let set: RawHookSet = deserialize(provider, value)?;

    let expected = HookFramework::ALL.len();
    if set.hooks.len() != expected {
        return Err(EngineError::invalid_response(
            provider,
            format!("expected {} hooks, got {}", expected, set.hooks.len()),
        ));
    }
    for hook in &set.hooks {
        if hook.visual_hook.trim().is_empty() || hook.voice_over_hook.trim().is_empty() {
            return Err(EngineError::invalid_response(
                provider,
                format!("blank hook for framework {:?}", hook.framework),
            ));
        }
    }
    Ok(set.hooks)
}

/// Normalize a formula-driven script: the body stages must match the
/// formula's declared stage order.
pub fn normalize_script(
    provider: ProviderKind,
    text: &str,
    schema: &Schema,
    formula: ScriptFormula,
) -> EngineResult<GeneratedScript> {
    let value = parse_json(provider, text, Some(schema))?;
    let script: GeneratedScript = deserialize(provider, value)?;

    let expected = formula.stages();
    if script.body.len() != expected.len() {
        return Err(EngineError::invalid_response(
            provider,
            format!(
                "formula {} expects {} stages, got {}",
                formula,
                expected.len(),
                script.body.len()
            ),
        ));
    }
    for (section, expected_stage) in script.body.iter().zip(expected) {
        if !section.stage.trim().eq_ignore_ascii_case(expected_stage) {
            return Err(EngineError::invalid_response(
                provider,
                format!(
                    "stage \"{}\" does not match expected \"{}\"",
                    section.stage, expected_stage
                ),
            ));
        }
    }
    Ok(script)
}

#[derive(Debug, Deserialize)]
struct RawYoutubeOptimization {
    analysis: String,
    titles: Vec<String>,
    title_strategy: String,
    description: String,
    hashtags: YoutubeHashtags,
    tags: Vec<String>,
}

/// Normalize a YouTube optimization: exactly one title per formula, and
/// candidate tags compacted into the length-bounded tag string.
pub fn normalize_youtube(
    provider: ProviderKind,
    text: &str,
    schema: &Schema,
) -> EngineResult<YoutubeOptimization> {
    let value = parse_json(provider, text, Some(schema))?;
    let raw: RawYoutubeOptimization = deserialize(provider, value)?;

    let expected = TitleFormula::ALL.len();
    if raw.titles.len() != expected {
        return Err(EngineError::invalid_response(
            provider,
            format!("expected {} titles, got {}", expected, raw.titles.len()),
        ));
    }
    Ok(YoutubeOptimization {
        analysis: raw.analysis,
        titles: raw.titles,
        title_strategy: raw.title_strategy,
        description: raw.description,
        hashtags: raw.hashtags,
        tags: compile_tags(&raw.tags),
    })
}

/// Normalize a free-text response: trim, reject empty.
pub fn normalize_text(provider: ProviderKind, text: &str) -> EngineResult<String> {
    let cleaned = strip_code_fence(text);
    if cleaned.is_empty() {
        return Err(EngineError::invalid_response(provider, "empty response"));
    }
    Ok(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts;
    use serde_json::json;

    fn idea_json() -> Value {
        json!({
            "ideas": [{
                "hooks": ["hook utama", "hook kedua"],
                "summary": "ringkasan",
                "unique_angle": "sudut unik",
                "outline": ["poin 1", "poin 2"],
                "cta": "follow dulu",
                "keywords": ["saham"],
                "hashtags": ["#saham"],
                "effort": "medium",
                "scores": {
                    "relevance": 8.0,
                    "novelty": 6.0,
                    "engagement_potential": 7.0,
                    "production_fit": 9.0
                },
                "total_score": 1,
                "warnings": []
            }]
        })
    }

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_normalize_ideas_mints_id_and_recomputes_score() {
        let schema = prompts::ideas::response_schema();
        let text = idea_json().to_string();
        let ideas = normalize_ideas(ProviderKind::Gemini, &text, &schema).unwrap();
        assert_eq!(ideas.len(), 1);
        assert!(ideas[0].id.starts_with("idea_"));
        assert!(ideas[0].id.ends_with("_0"));
        // Recomputed from the component scores, not the reported 1.
        assert_eq!(ideas[0].total_score, 77);
    }

    #[test]
    fn test_normalize_ideas_passes_empty_batch_through() {
        let schema = prompts::ideas::response_schema();
        let ideas = normalize_ideas(ProviderKind::Gemini, r#"{"ideas": []}"#, &schema).unwrap();
        assert!(ideas.is_empty());
    }

    #[test]
    fn test_malformed_json_is_invalid_response() {
        let schema = prompts::ideas::response_schema();
        let result = normalize_ideas(ProviderKind::Groq, "Here are your ideas!", &schema);
        assert!(matches!(result, Err(EngineError::InvalidResponse { .. })));
    }

    fn hooks_json(count: usize) -> String {
        let hooks: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "framework": format!("Framework {}", i),
                    "visual_hook": "KAMU HARUS TAHU INI",
                    "voice_over_hook": "ini alasan kenapa kamu harus nonton sampai habis"
                })
            })
            .collect();
        json!({ "hooks": hooks }).to_string()
    }

    #[test]
    fn test_normalize_hooks_requires_twelve() {
        let schema = prompts::hooks::response_schema();
        assert!(normalize_hooks(ProviderKind::Gemini, &hooks_json(12), &schema).is_ok());
        assert!(normalize_hooks(ProviderKind::Gemini, &hooks_json(11), &schema).is_err());
    }

    #[test]
    fn test_normalize_hooks_rejects_blank_hook() {
        let schema = prompts::hooks::response_schema();
        let text = json!({
            "hooks": (0..12).map(|i| json!({
                "framework": format!("F{}", i),
                "visual_hook": if i == 3 { "  " } else { "ok" },
                "voice_over_hook": "ok"
            })).collect::<Vec<_>>()
        })
        .to_string();
        assert!(normalize_hooks(ProviderKind::Gemini, &text, &schema).is_err());
    }

    fn script_json(stages: &[&str]) -> String {
        json!({
            "title": "Judul",
            "hook": "Hook pembuka",
            "hook_variations": [],
            "body": stages.iter().map(|s| json!({
                "stage": s,
                "content": "isi"
            })).collect::<Vec<_>>(),
            "cta": "Save dulu",
            "delivery_notes": "santai aja"
        })
        .to_string()
    }

    #[test]
    fn test_normalize_script_accepts_matching_stages() {
        let schema = prompts::script::formula_response_schema();
        let text = script_json(&["Problem", "Agitate", "Solution"]);
        let script =
            normalize_script(ProviderKind::Gemini, &text, &schema, ScriptFormula::Pas).unwrap();
        assert_eq!(script.body.len(), 3);
    }

    #[test]
    fn test_normalize_script_stage_compare_is_lenient_on_case() {
        let schema = prompts::script::formula_response_schema();
        let text = script_json(&["problem", " AGITATE ", "Solution"]);
        assert!(
            normalize_script(ProviderKind::Groq, &text, &schema, ScriptFormula::Pas).is_ok()
        );
    }

    #[test]
    fn test_normalize_script_rejects_wrong_stage_order() {
        let schema = prompts::script::formula_response_schema();
        let text = script_json(&["Agitate", "Problem", "Solution"]);
        assert!(
            normalize_script(ProviderKind::Gemini, &text, &schema, ScriptFormula::Pas).is_err()
        );
    }

    #[test]
    fn test_normalize_youtube_compacts_tags() {
        let schema = prompts::youtube::response_schema();
        let text = json!({
            "analysis": "analisis",
            "titles": (0..10).map(|i| format!("Judul {}", i)).collect::<Vec<_>>(),
            "title_strategy": "strategi",
            "description": "deskripsi",
            "hashtags": {"tier1": ["#a"], "tier2": ["#b"], "tier3": ["#c"]},
            "tags": ["saham", "investasi"]
        })
        .to_string();
        let result = normalize_youtube(ProviderKind::Gemini, &text, &schema).unwrap();
        assert_eq!(result.tags, "saham, investasi");
    }

    #[test]
    fn test_normalize_youtube_requires_ten_titles() {
        let schema = prompts::youtube::response_schema();
        let text = json!({
            "analysis": "a",
            "titles": ["only one"],
            "title_strategy": "s",
            "description": "d",
            "hashtags": {"tier1": [], "tier2": [], "tier3": []},
            "tags": []
        })
        .to_string();
        assert!(normalize_youtube(ProviderKind::Gemini, &text, &schema).is_err());
    }

    #[test]
    fn test_normalize_text_strips_fence_and_rejects_empty() {
        let cleaned = normalize_text(ProviderKind::Groq, "```\nexpanded prompt\n```").unwrap();
        assert_eq!(cleaned, "expanded prompt");
        assert!(normalize_text(ProviderKind::Groq, "```\n\n```").is_err());
    }
}
