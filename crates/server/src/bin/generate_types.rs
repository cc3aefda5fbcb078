//! Run with: cargo run --package server --bin generate-types --features typescript

use std::fs;
use std::path::Path;

fn main() {
    println!("Generating TypeScript types...");

    let out_dir = Path::new("frontend/src/types/generated");

    if let Err(e) = fs::create_dir_all(out_dir) {
        eprintln!("Failed to create output directory: {}", e);
        std::process::exit(1);
    }

    #[cfg(feature = "typescript")]
    {
        use ts_rs::TS;

        promptforge_core::GoalType::export_all_to(out_dir).expect("Failed to export GoalType");
        promptforge_core::PromptRequest::export_all_to(out_dir)
            .expect("Failed to export PromptRequest");
        promptforge_core::GeneratedPrompt::export_all_to(out_dir)
            .expect("Failed to export GeneratedPrompt");
        promptforge_core::RefineRequest::export_all_to(out_dir)
            .expect("Failed to export RefineRequest");
        promptforge_core::PromptRefinement::export_all_to(out_dir)
            .expect("Failed to export PromptRefinement");
        promptforge_core::ArgumentRequest::export_all_to(out_dir)
            .expect("Failed to export ArgumentRequest");
        promptforge_core::ArgumentAnalysis::export_all_to(out_dir)
            .expect("Failed to export ArgumentAnalysis");
        promptforge_core::PersonaEvaluation::export_all_to(out_dir)
            .expect("Failed to export PersonaEvaluation");
        promptforge_core::AppPlanRequest::export_all_to(out_dir)
            .expect("Failed to export AppPlanRequest");
        promptforge_core::AppPlan::export_all_to(out_dir).expect("Failed to export AppPlan");
        promptforge_core::WebsiteRequest::export_all_to(out_dir)
            .expect("Failed to export WebsiteRequest");
        promptforge_core::WebsiteCode::export_all_to(out_dir)
            .expect("Failed to export WebsiteCode");
        promptforge_core::PromptRecord::export_all_to(out_dir)
            .expect("Failed to export PromptRecord");
        promptforge_core::AnalysisRecord::export_all_to(out_dir)
            .expect("Failed to export AnalysisRecord");

        server::routes::GeneratedPromptData::export_all_to(out_dir)
            .expect("Failed to export GeneratedPromptData");
        server::routes::RefinedPromptData::export_all_to(out_dir)
            .expect("Failed to export RefinedPromptData");

        println!("TypeScript types written to {}", out_dir.display());
    }

    #[cfg(not(feature = "typescript"))]
    {
        eprintln!("Rebuild with --features typescript to export types");
        std::process::exit(1);
    }
}
