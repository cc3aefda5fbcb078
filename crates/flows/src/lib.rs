//! One module per flow: the input bounds, the prompt template, and the
//! response schema the model endpoint is asked to conform to. `executor`
//! holds the shared validate → render → generate → decode pipeline.

mod analyze_argument;
mod app_plan;
mod error;
mod executor;
mod generate_prompt;
mod refine_prompt;
mod website;

pub use analyze_argument::AnalyzeArgument;
pub use app_plan::GenerateAppPlan;
pub use error::FlowError;
pub use executor::{Flow, FlowExecutor};
pub use generate_prompt::GeneratePrompt;
pub use refine_prompt::RefinePrompt;
pub use website::GenerateWebsite;
