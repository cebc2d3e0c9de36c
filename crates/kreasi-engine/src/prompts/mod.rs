//! Prompt builders, one per generation feature.
//!
//! Builders are pure: a request in, a [`PromptSpec`] out. They resolve
//! `others` selectors to their free-text companions, enumerate every fixed
//! taxonomy the model must cover, and phrase boolean flags as imperative
//! rules in both directions, so an omission in the output is a provider
//! failure rather than an ambiguous prompt.

pub mod hooks;
pub mod ideas;
pub mod prompt_expansion;
pub mod script;
pub mod thumbnail;
pub mod youtube;

use kreasi_models::Schema;

/// Directive appended to the system instruction on recovery attempts.
pub const RECOVERY_DIRECTIVE: &str =
    "PERCOBAAN SEBELUMNYA GAGAL. Kembalikan HANYA JSON yang valid sesuai skema.";

/// A provider-agnostic prompt: instruction, user content, and an optional
/// structured-output schema shared with the normalizer.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    pub system_instruction: String,
    pub user_prompt: String,
    pub schema: Option<Schema>,
    /// Thinking budget hint for providers that support it.
    pub thinking_budget: Option<u32>,
}

impl PromptSpec {
    pub fn new(system_instruction: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_prompt: user_prompt.into(),
            schema: None,
            thinking_budget: None,
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_thinking_budget(mut self, budget: u32) -> Self {
        self.thinking_budget = Some(budget);
        self
    }

    /// Copy of this spec with the recovery directive appended to the
    /// system instruction, used after a failed attempt.
    pub fn with_recovery_directive(&self) -> Self {
        let mut spec = self.clone();
        if spec.system_instruction.is_empty() {
            spec.system_instruction = RECOVERY_DIRECTIVE.to_string();
        } else {
            spec.system_instruction =
                format!("{}\n\n{}", spec.system_instruction, RECOVERY_DIRECTIVE);
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_directive_appended() {
        let spec = PromptSpec::new("system", "user");
        let recovered = spec.with_recovery_directive();
        assert!(recovered.system_instruction.starts_with("system"));
        assert!(recovered.system_instruction.ends_with(RECOVERY_DIRECTIVE));
        // Original is untouched
        assert_eq!(spec.system_instruction, "system");
    }
}
