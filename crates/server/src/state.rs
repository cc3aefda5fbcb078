use std::sync::Arc;

use axum::http::HeaderMap;
use db::{AnalysisHistoryRepository, PromptHistoryRepository};
use flows::FlowExecutor;
use genai::GenAiClient;
use sqlx::SqlitePool;

use crate::auth::{bearer_token, IdentityProvider};
use crate::error::AppError;
use crate::history_writer::HistoryWriter;

#[derive(Clone)]
pub struct AppState {
    pub executor: FlowExecutor,
    pub prompt_history: PromptHistoryRepository,
    pub analysis_history: AnalysisHistoryRepository,
    pub history_writer: HistoryWriter,
    identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(pool: SqlitePool, client: GenAiClient, identity: Arc<dyn IdentityProvider>) -> Self {
        let prompt_history = PromptHistoryRepository::new(pool.clone());
        let analysis_history = AnalysisHistoryRepository::new(pool);
        let history_writer = HistoryWriter::spawn(prompt_history.clone(), analysis_history.clone());

        Self {
            executor: FlowExecutor::new(client),
            prompt_history,
            analysis_history,
            history_writer,
            identity,
        }
    }

    /// User id behind the request's bearer token, if any. Missing or
    /// unresolvable tokens mean an anonymous caller, not an error.
    pub async fn current_user(&self, headers: &HeaderMap) -> Option<String> {
        let token = bearer_token(headers)?;
        self.identity.resolve(token).await
    }

    pub async fn require_user(&self, headers: &HeaderMap) -> Result<String, AppError> {
        self.current_user(headers)
            .await
            .ok_or_else(|| AppError::Unauthorized("Please log in to view your history".to_string()))
    }
}
