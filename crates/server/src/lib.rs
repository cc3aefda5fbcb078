pub mod auth;
pub mod config;
pub mod error;
pub mod history_writer;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PromptForge API",
        version = "0.1.0",
        description = "API for PromptForge - AI prompt generation and analysis"
    ),
    paths(
        routes::health_check,
        routes::generate_prompt,
        routes::refine_prompt,
        routes::analyze_prompt,
        routes::analyze_argument,
        routes::generate_app_plan,
        routes::generate_website,
        routes::list_prompt_history,
        routes::list_analysis_history,
    ),
    components(schemas(
        routes::HealthResponse,
        routes::GeneratedPromptData,
        routes::RefinedPromptData,
        promptforge_core::GoalType,
        promptforge_core::PromptRequest,
        promptforge_core::GeneratedPrompt,
        promptforge_core::RefineRequest,
        promptforge_core::PromptRefinement,
        promptforge_core::ArgumentRequest,
        promptforge_core::ArgumentAnalysis,
        promptforge_core::PersonaEvaluation,
        promptforge_core::AppPlanRequest,
        promptforge_core::AppPlan,
        promptforge_core::TechStack,
        promptforge_core::DataModel,
        promptforge_core::PageSpec,
        promptforge_core::ApiIntegration,
        promptforge_core::WebsiteRequest,
        promptforge_core::WebsiteCode,
        promptforge_core::PromptRecord,
        promptforge_core::AnalysisRecord,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "flows", description = "Prompt generation and analysis flows"),
        (name = "history", description = "Per-user history of saved results"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health_check))
        .route("/api/generate", post(routes::generate_prompt))
        .route("/api/refine", post(routes::refine_prompt))
        .route("/api/analyzer", post(routes::analyze_prompt))
        .route("/api/argument", post(routes::analyze_argument))
        .route("/api/plan", post(routes::generate_app_plan))
        .route("/api/website", post(routes::generate_website))
        .route("/api/history/prompts", get(routes::list_prompt_history))
        .route("/api/history/analyses", get(routes::list_analysis_history))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
