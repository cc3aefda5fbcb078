mod app_plan;
mod argument;
mod generator;
mod goal;
mod history;
mod refinement;
mod website;

pub use app_plan::{ApiIntegration, AppPlan, AppPlanRequest, DataModel, PageSpec, TechStack};
pub use argument::{ArgumentAnalysis, ArgumentRequest, PersonaEvaluation};
pub use generator::{GeneratedPrompt, PromptRequest};
pub use goal::GoalType;
pub use history::{AnalysisRecord, PromptRecord};
pub use refinement::{PromptRefinement, RefineRequest};
pub use website::{WebsiteCode, WebsiteRequest};
