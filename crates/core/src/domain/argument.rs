use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::validate::check_length;

pub const ARGUMENT_MIN_CHARS: usize = 20;
pub const ARGUMENT_MAX_CHARS: usize = 5000;

pub const ARGUMENT_SCORE_MAX: u8 = 100;

/// Input for the argument-analysis flow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ArgumentRequest {
    pub text: String,
}

impl ArgumentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("text", &self.text, ARGUMENT_MIN_CHARS, ARGUMENT_MAX_CHARS)
    }
}

/// One evaluator persona's verdict on the argument.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PersonaEvaluation {
    pub persona: String,
    pub score: u8,
    pub explanation: String,
}

/// Full breakdown of an argument's logical strength.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ArgumentAnalysis {
    pub analysis_summary: String,
    pub main_claim: String,
    pub combined_score: u8,
    pub persona_evaluations: Vec<PersonaEvaluation>,
    pub supporting_points: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl ArgumentAnalysis {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.combined_score > ARGUMENT_SCORE_MAX {
            return Err(ValidationError::OutOfRange {
                field: "combinedScore",
                max: ARGUMENT_SCORE_MAX as usize,
                actual: self.combined_score as usize,
            });
        }
        if self.persona_evaluations.is_empty() {
            return Err(ValidationError::Empty {
                field: "personaEvaluations",
            });
        }
        for evaluation in &self.persona_evaluations {
            if evaluation.score > ARGUMENT_SCORE_MAX {
                return Err(ValidationError::OutOfRange {
                    field: "personaEvaluations.score",
                    max: ARGUMENT_SCORE_MAX as usize,
                    actual: evaluation.score as usize,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> ArgumentAnalysis {
        ArgumentAnalysis {
            analysis_summary: "Coherent but leans on anecdote.".to_string(),
            main_claim: "Remote work increases productivity.".to_string(),
            combined_score: 64,
            persona_evaluations: vec![PersonaEvaluation {
                persona: "Logician".to_string(),
                score: 60,
                explanation: "Premises mostly support the claim.".to_string(),
            }],
            supporting_points: vec!["Fewer interruptions".to_string()],
            weaknesses: vec!["Single-company sample".to_string()],
        }
    }

    #[test]
    fn test_valid_analysis() {
        assert!(analysis().validate().is_ok());
    }

    #[test]
    fn test_request_below_minimum() {
        let request = ArgumentRequest {
            text: "too short text".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_combined_score_over_bound() {
        let mut a = analysis();
        a.combined_score = 101;
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_empty_personas_rejected() {
        let mut a = analysis();
        a.persona_evaluations.clear();
        assert_eq!(
            a.validate(),
            Err(ValidationError::Empty {
                field: "personaEvaluations"
            })
        );
    }

    #[test]
    fn test_persona_score_over_bound() {
        let mut a = analysis();
        a.persona_evaluations[0].score = 120;
        assert!(a.validate().is_err());
    }
}
