use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use promptforge_core::{AnalysisRecord, PromptRecord};

use crate::error::AppError;
use crate::routes::ActionSuccess;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/history/prompts",
    responses(
        (status = 200, description = "Caller's saved prompts, newest first", body = Vec<PromptRecord>),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "history"
)]
pub async fn list_prompt_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ActionSuccess<Vec<PromptRecord>>>, AppError> {
    let user_id = state.require_user(&headers).await?;
    let records = state.prompt_history.list_for_user(&user_id).await?;
    Ok(ActionSuccess::json(records))
}

#[utoipa::path(
    get,
    path = "/api/history/analyses",
    responses(
        (status = 200, description = "Caller's saved analyses, newest first", body = Vec<AnalysisRecord>),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "history"
)]
pub async fn list_analysis_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ActionSuccess<Vec<AnalysisRecord>>>, AppError> {
    let user_id = state.require_user(&headers).await?;
    let records = state.analysis_history.list_for_user(&user_id).await?;
    Ok(ActionSuccess::json(records))
}
