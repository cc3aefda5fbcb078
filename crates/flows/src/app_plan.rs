use promptforge_core::{AppPlan, AppPlanRequest, ValidationError};
use serde_json::{json, Value};

use crate::executor::Flow;

/// Produces a step-by-step architectural plan for a full-stack application.
pub struct GenerateAppPlan;

impl Flow for GenerateAppPlan {
    type Input = AppPlanRequest;
    type Output = AppPlan;

    const NAME: &'static str = "app_plan";

    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        input.validate()
    }

    fn render(input: &Self::Input) -> String {
        format!(
            r#"You are an expert full-stack software architect. A user has provided a description of an application they want to build. Your task is to generate a comprehensive, detailed, and step-by-step architectural plan for this application, including Markdown links to relevant documentation.

**User's App Description:**
"{description}"

**Instructions:**

1.  **App Name and Tagline:** Come up with a creative name and a short, catchy tagline for the app.
2.  **Core Features:** Identify and list the primary features the application should have based on the user's description.
3.  **Tech Stack:** Recommend a concrete frontend framework, backend approach, database, and authentication provider suited to the idea.
4.  **Data Models:** Define the necessary data models (schemas) for the database. For each model, list its essential properties and their types.
5.  **Pages/Routes:** Outline the main pages or routes the application will have, including their URL path and a short description.
6.  **Backend Setup Analysis:** Analyze the app idea to determine if it requires a database or user authentication. If a database is needed, provide a detailed, numbered databaseSetup guide with Markdown links to the provider's documentation. If authentication is needed, provide a numbered authenticationSetup guide the same way.
7.  **API Integrations:** Suggest 1-2 potential third-party apiIntegrations that would enhance the app. For each one, give the name, a clear reason, numbered setupInstructions that cover storing the API key in an environment file excluded from version control and reading it only in server-side code, and a securityWarning stating that the key must never be exposed in client-side code.
8.  **Deployment Steps:** Provide a detailed deploymentSteps checklist for getting the app live, with Markdown links to the relevant provider documentation.

Structure your entire response strictly according to the output schema. Ensure all fields are populated correctly with detailed, actionable information."#,
            description = input.description
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "appName": {
                    "type": "STRING",
                    "description": "A creative and fitting name for the application."
                },
                "tagline": {
                    "type": "STRING",
                    "description": "A short, catchy tagline for the application."
                },
                "coreFeatures": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "The main features of the application."
                },
                "techStack": {
                    "type": "OBJECT",
                    "properties": {
                        "frontend": {"type": "STRING"},
                        "backend": {"type": "STRING"},
                        "database": {"type": "STRING"},
                        "authentication": {"type": "STRING"}
                    },
                    "required": ["frontend", "backend", "database", "authentication"]
                },
                "dataModels": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": {"type": "STRING"},
                            "properties": {
                                "type": "ARRAY",
                                "items": {"type": "STRING"}
                            }
                        },
                        "required": ["name", "properties"]
                    }
                },
                "pages": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": {"type": "STRING"},
                            "path": {"type": "STRING"},
                            "description": {"type": "STRING"}
                        },
                        "required": ["name", "path", "description"]
                    }
                },
                "databaseSetup": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "Numbered database setup steps, when a database is needed."
                },
                "authenticationSetup": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "Numbered authentication setup steps, when auth is needed."
                },
                "apiIntegrations": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": {"type": "STRING"},
                            "reason": {"type": "STRING"},
                            "setupInstructions": {
                                "type": "ARRAY",
                                "items": {"type": "STRING"}
                            },
                            "securityWarning": {"type": "STRING"}
                        },
                        "required": ["name", "reason", "setupInstructions", "securityWarning"]
                    }
                },
                "deploymentSteps": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"},
                    "description": "Checklist of steps for deploying the application."
                }
            },
            "required": [
                "appName", "tagline", "coreFeatures", "techStack", "dataModels", "pages"
            ]
        })
    }

    fn check_output(output: &Self::Output) -> Result<(), ValidationError> {
        output.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_quotes_description() {
        let input = AppPlanRequest {
            description: "A marketplace for vintage synthesizers".to_string(),
        };
        let prompt = GenerateAppPlan::render(&input);

        assert!(prompt.contains("\"A marketplace for vintage synthesizers\""));
    }

    #[test]
    fn test_optional_sections_not_required() {
        let schema = GenerateAppPlan::response_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(!required.iter().any(|f| f == "databaseSetup"));
        assert!(required.iter().any(|f| f == "techStack"));
    }
}
