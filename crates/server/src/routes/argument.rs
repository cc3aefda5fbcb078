use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use flows::AnalyzeArgument;
use promptforge_core::{AnalysisRecord, ArgumentAnalysis, ArgumentRequest};

use crate::error::AppError;
use crate::history_writer::HistoryWrite;
use crate::routes::ActionSuccess;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/argument",
    request_body = ArgumentRequest,
    responses(
        (status = 200, description = "Argument analysis", body = ArgumentAnalysis),
        (status = 400, description = "Input violates the flow's bounds"),
        (status = 502, description = "Model call failed or reply did not conform")
    ),
    tag = "flows"
)]
pub async fn analyze_argument(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ArgumentRequest>,
) -> Result<Json<ActionSuccess<ArgumentAnalysis>>, AppError> {
    let user = state.current_user(&headers).await;

    let output = state.executor.execute::<AnalyzeArgument>(&payload).await?;

    if let Some(user_id) = user {
        state
            .history_writer
            .enqueue(HistoryWrite::Analysis(AnalysisRecord::new(
                user_id,
                payload.text.clone(),
                output.clone(),
            )));
    }

    Ok(ActionSuccess::json(output))
}
