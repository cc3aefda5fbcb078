use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{ArgumentAnalysis, GoalType};

/// Saved copy of one prompt generation, owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub id: Uuid,
    pub user_id: String,
    pub idea: String,
    pub goal_type: GoalType,
    pub generated_prompt: String,
    pub created_at: DateTime<Utc>,
}

impl PromptRecord {
    pub fn new(
        user_id: impl Into<String>,
        idea: impl Into<String>,
        goal_type: GoalType,
        generated_prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            idea: idea.into(),
            goal_type,
            generated_prompt: generated_prompt.into(),
            created_at: Utc::now(),
        }
    }
}

/// Saved copy of one argument analysis, owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub user_id: String,
    pub text: String,
    pub analysis: ArgumentAnalysis,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(
        user_id: impl Into<String>,
        text: impl Into<String>,
        analysis: ArgumentAnalysis,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            text: text.into(),
            analysis,
            created_at: Utc::now(),
        }
    }
}
