use promptforge_core::{GeneratedPrompt, PromptRequest, ValidationError};
use serde_json::{json, Value};

use crate::executor::Flow;

/// Turns a raw idea plus a goal category into a complete, expert-level
/// prompt.
pub struct GeneratePrompt;

impl Flow for GeneratePrompt {
    type Input = PromptRequest;
    type Output = GeneratedPrompt;

    const NAME: &'static str = "generate_prompt";

    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        input.validate()
    }

    fn render(input: &Self::Input) -> String {
        format!(
            r#"I have an idea: {idea}.
Generate a complete, expert-level prompt for this idea covering goal, audience, tone, output format, and step-by-step instructions. The goal type is: {goal_type}.

After generating the instructions, analyze if the idea requires a database (e.g., for storing user data, content) or user authentication (e.g., for user accounts, profiles).

If it does, add a new section at the end called "**Backend Setup**". In this section, provide simple, high-level steps for what a developer would need to do to connect an authentication provider and a document database. Do not write code. For example:
1. Set up a new project in the provider's console.
2. Enable the document database and authentication.
3. Configure the SDK in the application.
4. Implement sign-up and login functions for users.
5. Create data structures to store application data."#,
            idea = input.idea,
            goal_type = input.goal_type
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "prompt": {
                    "type": "STRING",
                    "description": "The generated prompt."
                }
            },
            "required": ["prompt"]
        })
    }

    fn check_output(output: &Self::Output) -> Result<(), ValidationError> {
        output.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptforge_core::GoalType;

    #[test]
    fn test_render_substitutes_fields() {
        let input = PromptRequest {
            idea: "A reading habit tracker".to_string(),
            goal_type: GoalType::App,
        };
        let prompt = GeneratePrompt::render(&input);

        assert!(prompt.contains("I have an idea: A reading habit tracker."));
        assert!(prompt.contains("The goal type is: App Prompt."));
    }

    #[test]
    fn test_schema_requires_prompt() {
        let schema = GeneratePrompt::response_schema();
        assert_eq!(schema["required"][0], "prompt");
    }
}
