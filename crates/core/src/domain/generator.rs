use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::GoalType;
use crate::error::ValidationError;
use crate::validate::{check_length, check_not_empty};

pub const IDEA_MIN_CHARS: usize = 10;
pub const IDEA_MAX_CHARS: usize = 1000;

/// Input for the prompt-generation flow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub idea: String,
    pub goal_type: GoalType,
}

impl PromptRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("idea", &self.idea, IDEA_MIN_CHARS, IDEA_MAX_CHARS)
    }
}

/// Output of the prompt-generation flow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct GeneratedPrompt {
    pub prompt: String,
}

impl GeneratedPrompt {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("prompt", &self.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = PromptRequest {
            idea: "A personal finance tracker app".to_string(),
            goal_type: GoalType::App,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_idea_below_minimum() {
        let request = PromptRequest {
            idea: "hi".to_string(),
            goal_type: GoalType::App,
        };
        assert!(matches!(
            request.validate(),
            Err(ValidationError::TooShort { field: "idea", .. })
        ));
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let output = GeneratedPrompt {
            prompt: "  ".to_string(),
        };
        assert!(output.validate().is_err());
    }
}
