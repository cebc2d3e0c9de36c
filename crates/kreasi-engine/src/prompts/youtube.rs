//! Prompt builder for the YouTube optimization feature.

use kreasi_models::{Schema, TitleFormula, YoutubeOptimizationRequest};

use super::PromptSpec;

/// Expected shape of a YouTube optimization response.
pub fn response_schema() -> Schema {
    let hashtags = Schema::object(
        vec![
            ("tier1", Schema::array(Schema::string())),
            ("tier2", Schema::array(Schema::string())),
            ("tier3", Schema::array(Schema::string())),
        ],
        &["tier1", "tier2", "tier3"],
    );
    Schema::object(
        vec![
            ("analysis", Schema::string()),
            ("titles", Schema::array(Schema::string())),
            ("title_strategy", Schema::string()),
            ("description", Schema::string()),
            ("hashtags", hashtags),
            ("tags", Schema::array(Schema::string())),
        ],
        &[
            "analysis",
            "titles",
            "title_strategy",
            "description",
            "hashtags",
            "tags",
        ],
    )
}

/// System instruction with the 10 title formulas enumerated from the
/// taxonomy, one numbered entry each.
pub fn system_instruction() -> String {
    let formulas: Vec<String> = TitleFormula::ALL
        .iter()
        .enumerate()
        .map(|(index, formula)| format!("{}. **{}**", index + 1, formula))
        .collect();
    format!(
        r#"You are a YouTube Content Optimization Expert.
GENERATE EXACTLY 10 High-Performing Titles using these 10 specific formulas (one title per formula):
{}

GENERATE DESCRIPTION with [HOOK], [MAIN DESCRIPTION], [TIMESTAMPS], etc.
GENERATE HASHTAGS in 3 tiers (Specific, Broad, Viral).
GENERATE TAGS (comma separated, max 500 chars).
Output JSON only."#,
        formulas.join("\n")
    )
}

pub fn build(request: &YoutubeOptimizationRequest) -> PromptSpec {
    let user_prompt = format!(
        "Content: {}\nLanguage: {}",
        request.content_input, request.output_language
    );
    PromptSpec::new(system_instruction(), user_prompt).with_schema(response_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_enumerates_ten_formulas() {
        let instruction = system_instruction();
        for formula in TitleFormula::ALL {
            assert!(instruction.contains(formula.as_str()));
        }
        assert!(instruction.contains("10. **Skill/Value Declaration**"));
    }

    #[test]
    fn test_schema_requires_all_sections() {
        let schema = response_schema();
        let value = serde_json::json!({
            "analysis": "a",
            "titles": ["t"],
            "title_strategy": "s",
            "description": "d",
            "hashtags": {"tier1": [], "tier2": [], "tier3": []}
        });
        // tags missing
        assert!(schema.validate(&value).is_err());
    }
}
