use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::validate::check_length;

pub const DESCRIPTION_MIN_CHARS: usize = 20;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Input for the application-plan flow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct AppPlanRequest {
    pub description: String,
}

impl AppPlanRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length(
            "description",
            &self.description,
            DESCRIPTION_MIN_CHARS,
            DESCRIPTION_MAX_CHARS,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct TechStack {
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub authentication: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct DataModel {
    pub name: String,
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PageSpec {
    pub name: String,
    pub path: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ApiIntegration {
    pub name: String,
    pub reason: String,
    pub setup_instructions: Vec<String>,
    pub security_warning: String,
}

/// Architectural plan for a full-stack application.
///
/// The setup/integration/deployment sections are optional: the model emits
/// them only when its analysis of the idea calls for them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AppPlan {
    pub app_name: String,
    pub tagline: String,
    pub core_features: Vec<String>,
    pub tech_stack: TechStack,
    pub data_models: Vec<DataModel>,
    pub pages: Vec<PageSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_setup: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_setup: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_integrations: Option<Vec<ApiIntegration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_steps: Option<Vec<String>>,
}

impl AppPlan {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.core_features.is_empty() {
            return Err(ValidationError::Empty {
                field: "coreFeatures",
            });
        }
        Ok(())
    }
}
