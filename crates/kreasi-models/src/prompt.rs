//! Prompt expansion request type.

use serde::{Deserialize, Serialize};

use crate::validation::{require_non_empty, ValidationError};

/// Request to expand a short user intent into a fully structured prompt
/// ([ROLE], [CONTEXT], [INSTRUCTIONS], [CONSTRAINTS], [OUTPUT FORMAT]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptExpansionRequest {
    pub user_input: String,
}

impl PromptExpansionRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("user_input", &self.user_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert!(PromptExpansionRequest::default().validate().is_err());
        let request = PromptExpansionRequest {
            user_input: "buat prompt untuk riset pasar".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
