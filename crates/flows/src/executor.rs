use genai::GenAiClient;
use promptforge_core::ValidationError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FlowError;

/// One input-schema/template/output-schema triple bound to a single model
/// call.
pub trait Flow {
    type Input;
    type Output: DeserializeOwned;

    /// Name used for logging and decode-failure messages.
    const NAME: &'static str;

    /// Reject inputs that violate the flow's declared bounds.
    fn validate(input: &Self::Input) -> Result<(), ValidationError>;

    /// Substitute the validated input into the flow's fixed template.
    fn render(input: &Self::Input) -> String;

    /// Shape description the model endpoint is asked to conform to.
    fn response_schema() -> Value;

    /// Bounds the decoded output must satisfy (numeric ranges, required
    /// non-emptiness).
    fn check_output(output: &Self::Output) -> Result<(), ValidationError>;
}

/// Shared request pipeline for all flows.
///
/// Exactly one attempt per call; failures surface immediately. The executor
/// never persists anything.
#[derive(Clone)]
pub struct FlowExecutor {
    client: GenAiClient,
}

impl FlowExecutor {
    pub fn new(client: GenAiClient) -> Self {
        Self { client }
    }

    pub async fn execute<F: Flow>(&self, input: &F::Input) -> Result<F::Output, FlowError> {
        F::validate(input)?;

        let prompt = F::render(input);
        tracing::debug!(flow = F::NAME, "dispatching flow to model endpoint");

        let reply = self
            .client
            .generate_json(&prompt, F::response_schema())
            .await
            .map_err(|e| FlowError::Generation(e.to_string()))?;

        let output: F::Output = serde_json::from_value(reply).map_err(|e| {
            FlowError::Generation(format!("reply does not match the {} shape: {}", F::NAME, e))
        })?;

        F::check_output(&output).map_err(|e| {
            FlowError::Generation(format!("reply violates a {} bound: {}", F::NAME, e))
        })?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalyzeArgument, GeneratePrompt, RefinePrompt};
    use promptforge_core::{ArgumentRequest, GoalType, PromptRequest, RefineRequest};
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn executor(server: &MockServer) -> FlowExecutor {
        FlowExecutor::new(GenAiClient::with_base_url(server.uri(), "key", "test-model"))
    }

    fn reply_with(body: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": body.to_string()}]}}
            ]
        }))
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply_with(json!({"prompt": "unused"})))
            .expect(0)
            .mount(&server)
            .await;

        let input = PromptRequest {
            idea: "hi".to_string(),
            goal_type: GoalType::App,
        };
        let err = executor(&server)
            .execute::<GeneratePrompt>(&input)
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Validation(_)));
    }

    #[tokio::test]
    async fn test_valid_input_returns_conformant_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply_with(json!({"prompt": "You are an expert app builder..."})))
            .expect(1)
            .mount(&server)
            .await;

        let input = PromptRequest {
            idea: "A personal finance tracker app".to_string(),
            goal_type: GoalType::App,
        };
        let output = executor(&server)
            .execute::<GeneratePrompt>(&input)
            .await
            .unwrap();

        assert!(!output.prompt.is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_is_a_generation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply_with(json!({"unrelated": true})))
            .mount(&server)
            .await;

        let input = PromptRequest {
            idea: "A personal finance tracker app".to_string(),
            goal_type: GoalType::App,
        };
        let err = executor(&server)
            .execute::<GeneratePrompt>(&input)
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Generation(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_a_generation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply_with(json!({
                "analysis": "ok",
                "score": 150,
                "clarity": 20,
                "completeness": 20,
                "creativity": 20,
                "goalRelevance": 20,
                "weakPoints": [],
                "enhancedPrompt": "better"
            })))
            .mount(&server)
            .await;

        let input = RefineRequest {
            initial_prompt: "Write something nice about autumn.".to_string(),
        };
        let err = executor(&server)
            .execute::<RefinePrompt>(&input)
            .await
            .unwrap_err();

        match err {
            FlowError::Generation(message) => assert!(message.contains("refine_prompt")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_persona_list_is_a_generation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply_with(json!({
                "analysisSummary": "s",
                "mainClaim": "c",
                "combinedScore": 50,
                "personaEvaluations": [],
                "supportingPoints": [],
                "weaknesses": []
            })))
            .mount(&server)
            .await;

        let input = ArgumentRequest {
            text: "Remote work increases productivity for all.".to_string(),
        };
        let err = executor(&server)
            .execute::<AnalyzeArgument>(&input)
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Generation(_)));
    }

    #[tokio::test]
    async fn test_endpoint_failure_is_a_generation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let input = PromptRequest {
            idea: "A personal finance tracker app".to_string(),
            goal_type: GoalType::App,
        };
        let err = executor(&server)
            .execute::<GeneratePrompt>(&input)
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Generation(_)));
    }
}
