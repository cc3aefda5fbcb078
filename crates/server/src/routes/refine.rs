use axum::extract::State;
use axum::Json;
use flows::RefinePrompt;
use promptforge_core::{format, PromptRefinement, RefineRequest};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::routes::ActionSuccess;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RefinedPromptData {
    /// The refinement rendered as a single Markdown report.
    pub prompt: String,
}

#[utoipa::path(
    post,
    path = "/api/refine",
    request_body = RefineRequest,
    responses(
        (status = 200, description = "Refinement rendered as a Markdown report"),
        (status = 400, description = "Input violates the flow's bounds"),
        (status = 502, description = "Model call failed or reply did not conform")
    ),
    tag = "flows"
)]
pub async fn refine_prompt(
    State(state): State<AppState>,
    Json(payload): Json<RefineRequest>,
) -> Result<Json<ActionSuccess<RefinedPromptData>>, AppError> {
    let output = state.executor.execute::<RefinePrompt>(&payload).await?;

    Ok(ActionSuccess::json(RefinedPromptData {
        prompt: format::refinement_report(&output),
    }))
}

#[utoipa::path(
    post,
    path = "/api/analyzer",
    request_body = RefineRequest,
    responses(
        (status = 200, description = "Structured refinement analysis", body = PromptRefinement),
        (status = 400, description = "Input violates the flow's bounds"),
        (status = 502, description = "Model call failed or reply did not conform")
    ),
    tag = "flows"
)]
pub async fn analyze_prompt(
    State(state): State<AppState>,
    Json(payload): Json<RefineRequest>,
) -> Result<Json<ActionSuccess<PromptRefinement>>, AppError> {
    let output = state.executor.execute::<RefinePrompt>(&payload).await?;
    Ok(ActionSuccess::json(output))
}
