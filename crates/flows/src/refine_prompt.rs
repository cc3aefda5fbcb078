use promptforge_core::{PromptRefinement, RefineRequest, ValidationError};
use serde_json::{json, Value};

use crate::executor::Flow;

/// Scores an existing prompt against four criteria and rewrites it.
pub struct RefinePrompt;

impl Flow for RefinePrompt {
    type Input = RefineRequest;
    type Output = PromptRefinement;

    const NAME: &'static str = "refine_prompt";

    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        input.validate()
    }

    fn render(input: &Self::Input) -> String {
        format!(
            r#"You are a professional Prompt Analyzer and Optimizer AI.
Your task is to analyze, score, and improve any prompt that the user provides.

Follow these steps strictly:

1. **Read the user's prompt carefully.**
2. **Provide a detailed analysis** of how strong the prompt is.
3. **Provide numeric scores** based on:
   - Clarity and Specificity (0-25)
   - Completeness and Context (0-25)
   - Creativity and Originality (0-25)
   - Goal Relevance and Actionability (0-25)
   The total score is the sum of the four criteria (0-100).
4. **List the Missing or Weak Points** — what the user can improve (e.g., lack of detail, unclear goals, missing output format).
5. **Enhance the Prompt** — rewrite it to be more detailed, clear, and effective while keeping the same intent.

All scores must be integers within their stated ranges.

Now, analyze this user prompt:

"{initial_prompt}""#,
            initial_prompt = input.initial_prompt
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "analysis": {
                    "type": "STRING",
                    "description": "A detailed analysis of how strong the prompt is."
                },
                "score": {
                    "type": "INTEGER",
                    "description": "The total numeric score (0-100)."
                },
                "clarity": {
                    "type": "INTEGER",
                    "description": "Clarity and Specificity score (0-25)."
                },
                "completeness": {
                    "type": "INTEGER",
                    "description": "Completeness and Context score (0-25)."
                },
                "creativity": {
                    "type": "INTEGER",
                    "description": "Creativity and Originality score (0-25)."
                },
                "goalRelevance": {
                    "type": "INTEGER",
                    "description": "Goal Relevance and Actionability score (0-25)."
                },
                "weakPoints": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "A list of missing or weak points."
                },
                "enhancedPrompt": {
                    "type": "STRING",
                    "description": "The rewritten, enhanced prompt."
                }
            },
            "required": [
                "analysis", "score", "clarity", "completeness", "creativity",
                "goalRelevance", "weakPoints", "enhancedPrompt"
            ]
        })
    }

    fn check_output(output: &Self::Output) -> Result<(), ValidationError> {
        output.validate()
    }
}
