//! Prompt builder for the prompt expansion feature.

use kreasi_models::PromptExpansionRequest;

use super::PromptSpec;

const SYSTEM_INSTRUCTION: &str = "You are an Expert Prompt Generator. Structure: [ROLE], [CONTEXT], [INSTRUCTIONS], [CONSTRAINTS], [OUTPUT FORMAT].";

pub fn build(request: &PromptExpansionRequest) -> PromptSpec {
    let user_prompt = format!("Generate prompt for: \"{}\"", request.user_input);
    PromptSpec::new(SYSTEM_INSTRUCTION, user_prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_spec_has_no_schema() {
        let request = PromptExpansionRequest {
            user_input: "riset kompetitor untuk UMKM kopi".to_string(),
        };
        let spec = build(&request);
        assert!(spec.schema.is_none());
        assert!(spec.user_prompt.contains("riset kompetitor"));
    }
}
