use promptforge_core::{ArgumentAnalysis, ArgumentRequest, ValidationError};
use serde_json::{json, Value};

use crate::executor::Flow;

/// Evaluates the logical strength of a text argument through a panel of
/// evaluator personas and a combined 0-100 score.
pub struct AnalyzeArgument;

impl Flow for AnalyzeArgument {
    type Input = ArgumentRequest;
    type Output = ArgumentAnalysis;

    const NAME: &'static str = "analyze_argument";

    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        input.validate()
    }

    fn render(input: &Self::Input) -> String {
        format!(
            r#"You are an expert in logic, rhetoric, and critical thinking. Your task is to analyze the following text and evaluate the strength of its argument.

Follow these steps:
1.  **Identify the Main Claim:** What is the single most important point the author is trying to make?
2.  **List the Supporting Points:** Identify all the premises, evidence, and reasons the author provides to support the main claim.
3.  **Identify Weaknesses & Fallacies:** Scrutinize the argument for any logical fallacies (e.g., ad hominem, straw man, false dilemma), unsupported claims, or weak evidence.
4.  **Evaluate as Three Personas:** Score the argument from 0 (very weak, fallacious) to 100 (very strong, well-supported) as each of these evaluators, with a short explanation per persona:
    - The Logician, judging formal validity and premise support.
    - The Skeptic, judging evidence quality and unstated assumptions.
    - The Rhetorician, judging persuasive force and framing.
5.  **Combine the Scores:** Provide a combinedScore from 0 to 100 reflecting the personas' consensus.
6.  **Summarize Your Analysis:** Write a brief summary of your findings.

All scores must be integers between 0 and 100.

Analyze the following text:

"{text}""#,
            text = input.text
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "analysisSummary": {
                    "type": "STRING",
                    "description": "A brief, high-level summary of the argument analysis."
                },
                "mainClaim": {
                    "type": "STRING",
                    "description": "The primary claim or thesis of the argument."
                },
                "combinedScore": {
                    "type": "INTEGER",
                    "description": "Consensus strength score from 0 to 100."
                },
                "personaEvaluations": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "persona": {"type": "STRING"},
                            "score": {
                                "type": "INTEGER",
                                "description": "This persona's score from 0 to 100."
                            },
                            "explanation": {"type": "STRING"}
                        },
                        "required": ["persona", "score", "explanation"]
                    },
                    "description": "One entry per evaluator persona."
                },
                "supportingPoints": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "The main supporting points, premises, or evidence provided."
                },
                "weaknesses": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "Identified logical fallacies, weak points, or unsupported claims."
                }
            },
            "required": [
                "analysisSummary", "mainClaim", "combinedScore",
                "personaEvaluations", "supportingPoints", "weaknesses"
            ]
        })
    }

    fn check_output(output: &Self::Output) -> Result<(), ValidationError> {
        output.validate()
    }
}
