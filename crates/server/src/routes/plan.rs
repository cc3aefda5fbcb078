use axum::extract::State;
use axum::Json;
use flows::GenerateAppPlan;
use promptforge_core::{AppPlan, AppPlanRequest};

use crate::error::AppError;
use crate::routes::ActionSuccess;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/plan",
    request_body = AppPlanRequest,
    responses(
        (status = 200, description = "Application plan", body = AppPlan),
        (status = 400, description = "Input violates the flow's bounds"),
        (status = 502, description = "Model call failed or reply did not conform")
    ),
    tag = "flows"
)]
pub async fn generate_app_plan(
    State(state): State<AppState>,
    Json(payload): Json<AppPlanRequest>,
) -> Result<Json<ActionSuccess<AppPlan>>, AppError> {
    let output = state.executor.execute::<GenerateAppPlan>(&payload).await?;
    Ok(ActionSuccess::json(output))
}
