use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::validate::{check_length, check_not_empty};

pub const WEBSITE_PROMPT_MIN_CHARS: usize = 20;
pub const WEBSITE_PROMPT_MAX_CHARS: usize = 1000;

/// Input for the website-generation flow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct WebsiteRequest {
    pub prompt: String,
}

impl WebsiteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length(
            "prompt",
            &self.prompt,
            WEBSITE_PROMPT_MIN_CHARS,
            WEBSITE_PROMPT_MAX_CHARS,
        )
    }
}

/// Generated single-component website source.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct WebsiteCode {
    pub code: String,
}

impl WebsiteCode {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("code", &self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_bounds() {
        let request = WebsiteRequest {
            prompt: "landing page".to_string(),
        };
        assert!(request.validate().is_err());

        let request = WebsiteRequest {
            prompt: "A landing page for a local coffee roastery".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_code_rejected() {
        let output = WebsiteCode {
            code: String::new(),
        };
        assert!(output.validate().is_err());
    }
}
