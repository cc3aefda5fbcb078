mod analysis_history_repository;
mod prompt_history_repository;

pub use analysis_history_repository::AnalysisHistoryRepository;
pub use prompt_history_repository::PromptHistoryRepository;
