use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use flows::GeneratePrompt;
use promptforge_core::{format, PromptRecord, PromptRequest};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::history_writer::HistoryWrite;
use crate::routes::ActionSuccess;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct GeneratedPromptData {
    /// Display form: the goal header followed by the generated prompt.
    pub prompt: String,
}

#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = PromptRequest,
    responses(
        (status = 200, description = "Prompt generated"),
        (status = 400, description = "Input violates the flow's bounds"),
        (status = 502, description = "Model call failed or reply did not conform")
    ),
    tag = "flows"
)]
pub async fn generate_prompt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PromptRequest>,
) -> Result<Json<ActionSuccess<GeneratedPromptData>>, AppError> {
    let user = state.current_user(&headers).await;

    let output = state.executor.execute::<GeneratePrompt>(&payload).await?;

    if let Some(user_id) = user {
        state
            .history_writer
            .enqueue(HistoryWrite::Prompt(PromptRecord::new(
                user_id,
                payload.idea.clone(),
                payload.goal_type,
                output.prompt.clone(),
            )));
    }

    Ok(ActionSuccess::json(GeneratedPromptData {
        prompt: format::full_prompt(payload.goal_type, &output.prompt),
    }))
}
