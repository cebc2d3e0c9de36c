//! Prompt builder for the hook set feature.

use kreasi_models::{HookFramework, HookRequest, Schema};

use super::PromptSpec;

/// Expected shape of a hook set response.
pub fn response_schema() -> Schema {
    let hook = Schema::object(
        vec![
            ("framework", Schema::string()),
            (
                "visual_hook",
                Schema::string().described("4-6 impactful words for on-screen text"),
            ),
            (
                "voice_over_hook",
                Schema::string().described("a speakable, punchy narration of 15-20 words"),
            ),
        ],
        &["framework", "visual_hook", "voice_over_hook"],
    );
    Schema::object(vec![("hooks", Schema::array(hook))], &["hooks"])
}

/// System instruction enumerating all 12 frameworks, built from the
/// taxonomy so instruction and validation cannot drift.
pub fn system_instruction() -> String {
    let frameworks: Vec<&str> = HookFramework::ALL.iter().map(|f| f.as_str()).collect();
    format!(
        "You are a Hook Generator Expert specializing in creating scroll-stopping, \
attention-grabbing hooks for short-form video content (Reels, Shorts, TikTok) and social \
media posts. Your expertise is based on proven psychological frameworks that capture \
audience attention within the first 3 seconds. Your core mission is to generate \
high-converting hooks that stop the scroll, trigger psychological responses, are short and \
powerful, use strong action verbs, create immediate value, and are authentic. You MUST \
generate hooks using ALL 12 proven hook types: {}. For each type, create a distinct Visual \
Hook (4-6 impactful words for on-screen text) and a Voice Over Hook (a speakable, punchy \
narration of 15-20 words). Follow all rules regarding filler words, directness, strong \
verbs, and psychological triggers. Adapt your language and intensity based on the \
requested tone and output language.",
        frameworks.join(", ")
    )
}

pub fn build(request: &HookRequest) -> PromptSpec {
    let user_prompt = format!(
        r#"Generate hooks based on the following inputs:
- Content Description: "{script}"
- Tone: {tone}
- Output Language: {language}

Generate one hook for EACH of the 12 frameworks.
"#,
        script = request.script,
        tone = request.tone_text(),
        language = request.output_language,
    );

    PromptSpec::new(system_instruction(), user_prompt).with_schema(response_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_names_every_framework() {
        let instruction = system_instruction();
        for framework in HookFramework::ALL {
            assert!(
                instruction.contains(framework.as_str()),
                "missing framework {}",
                framework
            );
        }
    }

    #[test]
    fn test_blank_tone_uses_default() {
        let request = HookRequest {
            script: "3 kebiasaan boros yang nggak kamu sadari".to_string(),
            tone: String::new(),
            output_language: Default::default(),
        };
        let spec = build(&request);
        assert!(spec.user_prompt.contains(HookRequest::DEFAULT_TONE));
        assert!(spec.schema.is_some());
    }
}
