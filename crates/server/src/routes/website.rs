use axum::extract::State;
use axum::Json;
use flows::GenerateWebsite;
use promptforge_core::{WebsiteCode, WebsiteRequest};

use crate::error::AppError;
use crate::routes::ActionSuccess;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/website",
    request_body = WebsiteRequest,
    responses(
        (status = 200, description = "Generated website component", body = WebsiteCode),
        (status = 400, description = "Input violates the flow's bounds"),
        (status = 502, description = "Model call failed or reply did not conform")
    ),
    tag = "flows"
)]
pub async fn generate_website(
    State(state): State<AppState>,
    Json(payload): Json<WebsiteRequest>,
) -> Result<Json<ActionSuccess<WebsiteCode>>, AppError> {
    let output = state.executor.execute::<GenerateWebsite>(&payload).await?;
    Ok(ActionSuccess::json(output))
}
