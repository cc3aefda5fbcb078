use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::validate::{check_length, check_not_empty};

pub const INITIAL_PROMPT_MIN_CHARS: usize = 10;
pub const INITIAL_PROMPT_MAX_CHARS: usize = 2000;

pub const TOTAL_SCORE_MAX: u8 = 100;
pub const CRITERION_SCORE_MAX: u8 = 25;

/// Input for the prompt-refinement flow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    pub initial_prompt: String,
}

impl RefineRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length(
            "initialPrompt",
            &self.initial_prompt,
            INITIAL_PROMPT_MIN_CHARS,
            INITIAL_PROMPT_MAX_CHARS,
        )
    }
}

/// Scored analysis plus an enhanced rewrite of a prompt.
///
/// The total score is the 0-100 sum judgment; each criterion is scored 0-25.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PromptRefinement {
    pub analysis: String,
    pub score: u8,
    pub clarity: u8,
    pub completeness: u8,
    pub creativity: u8,
    pub goal_relevance: u8,
    pub weak_points: Vec<String>,
    pub enhanced_prompt: String,
}

impl PromptRefinement {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_score("score", self.score, TOTAL_SCORE_MAX)?;
        check_score("clarity", self.clarity, CRITERION_SCORE_MAX)?;
        check_score("completeness", self.completeness, CRITERION_SCORE_MAX)?;
        check_score("creativity", self.creativity, CRITERION_SCORE_MAX)?;
        check_score("goalRelevance", self.goal_relevance, CRITERION_SCORE_MAX)?;
        check_not_empty("enhancedPrompt", &self.enhanced_prompt)
    }
}

fn check_score(field: &'static str, value: u8, max: u8) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::OutOfRange {
            field,
            max: max as usize,
            actual: value as usize,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refinement() -> PromptRefinement {
        PromptRefinement {
            analysis: "Solid structure, vague audience.".to_string(),
            score: 72,
            clarity: 20,
            completeness: 18,
            creativity: 16,
            goal_relevance: 18,
            weak_points: vec!["No output format specified".to_string()],
            enhanced_prompt: "Write a detailed...".to_string(),
        }
    }

    #[test]
    fn test_valid_refinement() {
        assert!(refinement().validate().is_ok());
    }

    #[test]
    fn test_criterion_over_bound() {
        let mut r = refinement();
        r.clarity = 26;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_total_over_bound() {
        let mut r = refinement();
        r.score = 101;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = serde_json::to_value(refinement()).unwrap();
        assert!(json.get("goalRelevance").is_some());
        assert!(json.get("enhancedPrompt").is_some());
    }
}
