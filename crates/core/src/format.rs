//! Markdown rendering of flow results for display, clipboard copy, and
//! download.

use crate::domain::{AppPlan, ArgumentAnalysis, GoalType, PromptRefinement};

/// Display form of a generated prompt: the goal header followed by the body.
pub fn full_prompt(goal_type: GoalType, prompt: &str) -> String {
    format!("**Goal:** {}\n\n{}", goal_type, prompt)
}

/// The refinement report shown (and copied) as a single Markdown block.
pub fn refinement_report(refinement: &PromptRefinement) -> String {
    let mut body = String::new();

    body.push_str("---\n🧩 **Prompt Analysis**\n");
    body.push_str(&refinement.analysis);
    body.push_str("\n\n");

    body.push_str(&format!("🎯 **Prompt Score:** {}/100\n", refinement.score));
    body.push_str(&format!("• Clarity: {}/25\n", refinement.clarity));
    body.push_str(&format!("• Completeness: {}/25\n", refinement.completeness));
    body.push_str(&format!("• Creativity: {}/25\n", refinement.creativity));
    body.push_str(&format!(
        "• Goal Relevance: {}/25\n\n",
        refinement.goal_relevance
    ));

    body.push_str("⚠️ **Missing or Weak Points**\n");
    for point in &refinement.weak_points {
        body.push_str(&format!("- {}\n", point));
    }

    body.push_str("\n✨ **Enhanced Prompt**\n");
    body.push_str(&format!("\"{}\"\n---", refinement.enhanced_prompt));

    body
}

/// Bullet-text summary of an argument analysis for clipboard copy.
pub fn analysis_summary(analysis: &ArgumentAnalysis) -> String {
    let mut body = String::new();

    body.push_str(&format!("**Main Claim:** {}\n\n", analysis.main_claim));
    body.push_str(&format!(
        "**Combined Score:** {}/100\n\n",
        analysis.combined_score
    ));

    body.push_str("**Persona Evaluations**\n");
    for evaluation in &analysis.persona_evaluations {
        body.push_str(&format!(
            "- {} ({}/100): {}\n",
            evaluation.persona, evaluation.score, evaluation.explanation
        ));
    }

    if !analysis.supporting_points.is_empty() {
        body.push_str("\n**Supporting Points**\n");
        for point in &analysis.supporting_points {
            body.push_str(&format!("- {}\n", point));
        }
    }

    if !analysis.weaknesses.is_empty() {
        body.push_str("\n**Weaknesses**\n");
        for weakness in &analysis.weaknesses {
            body.push_str(&format!("- {}\n", weakness));
        }
    }

    body.push_str(&format!("\n{}", analysis.analysis_summary));

    body
}

/// Markdown export of an application plan.
pub fn app_plan_markdown(plan: &AppPlan) -> String {
    let mut body = String::new();

    body.push_str(&format!("# {}\n\n_{}_\n\n", plan.app_name, plan.tagline));

    body.push_str("## Core Features\n\n");
    for feature in &plan.core_features {
        body.push_str(&format!("- {}\n", feature));
    }

    body.push_str("\n## Tech Stack\n\n");
    body.push_str(&format!("- **Frontend:** {}\n", plan.tech_stack.frontend));
    body.push_str(&format!("- **Backend:** {}\n", plan.tech_stack.backend));
    body.push_str(&format!("- **Database:** {}\n", plan.tech_stack.database));
    body.push_str(&format!(
        "- **Authentication:** {}\n",
        plan.tech_stack.authentication
    ));

    body.push_str("\n## Data Models\n\n");
    for model in &plan.data_models {
        body.push_str(&format!("### {}\n", model.name));
        for property in &model.properties {
            body.push_str(&format!("- `{}`\n", property));
        }
        body.push('\n');
    }

    body.push_str("## Pages\n\n");
    for page in &plan.pages {
        body.push_str(&format!(
            "- **{}** (`{}`): {}\n",
            page.name, page.path, page.description
        ));
    }

    if let Some(steps) = &plan.database_setup {
        push_numbered_section(&mut body, "Database Setup", steps);
    }
    if let Some(steps) = &plan.authentication_setup {
        push_numbered_section(&mut body, "Authentication Setup", steps);
    }

    if let Some(integrations) = &plan.api_integrations {
        body.push_str("\n## API Integrations\n\n");
        for integration in integrations {
            body.push_str(&format!(
                "### {}\n\n{}\n\n",
                integration.name, integration.reason
            ));
            for (i, step) in integration.setup_instructions.iter().enumerate() {
                body.push_str(&format!("{}. {}\n", i + 1, step));
            }
            body.push_str(&format!("\n> ⚠️ {}\n", integration.security_warning));
        }
    }

    if let Some(steps) = &plan.deployment_steps {
        push_numbered_section(&mut body, "Deployment", steps);
    }

    body
}

fn push_numbered_section(body: &mut String, title: &str, steps: &[String]) {
    body.push_str(&format!("\n## {}\n\n", title));
    for (i, step) in steps.iter().enumerate() {
        body.push_str(&format!("{}. {}\n", i + 1, step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DataModel, PageSpec, PersonaEvaluation, TechStack};

    #[test]
    fn test_full_prompt_header() {
        let text = full_prompt(GoalType::App, "Build a tracker.");
        assert_eq!(text, "**Goal:** App Prompt\n\nBuild a tracker.");
    }

    #[test]
    fn test_refinement_report_sections() {
        let report = refinement_report(&PromptRefinement {
            analysis: "Decent prompt.".to_string(),
            score: 70,
            clarity: 20,
            completeness: 17,
            creativity: 15,
            goal_relevance: 18,
            weak_points: vec!["Unclear goal".to_string(), "No format".to_string()],
            enhanced_prompt: "Better prompt".to_string(),
        });

        assert!(report.contains("🎯 **Prompt Score:** 70/100"));
        assert!(report.contains("• Clarity: 20/25"));
        assert!(report.contains("- Unclear goal"));
        assert!(report.contains("\"Better prompt\""));
        assert!(report.starts_with("---\n"));
        assert!(report.ends_with("---"));
    }

    #[test]
    fn test_analysis_summary_bullets() {
        let text = analysis_summary(&ArgumentAnalysis {
            analysis_summary: "Overall weak.".to_string(),
            main_claim: "Cats are better.".to_string(),
            combined_score: 41,
            persona_evaluations: vec![PersonaEvaluation {
                persona: "Skeptic".to_string(),
                score: 35,
                explanation: "Anecdotal.".to_string(),
            }],
            supporting_points: vec![],
            weaknesses: vec!["Straw man".to_string()],
        });

        assert!(text.contains("**Main Claim:** Cats are better."));
        assert!(text.contains("- Skeptic (35/100): Anecdotal."));
        assert!(text.contains("- Straw man"));
        // empty sections are skipped entirely
        assert!(!text.contains("**Supporting Points**"));
    }

    #[test]
    fn test_app_plan_markdown() {
        let plan = AppPlan {
            app_name: "ShelfShare".to_string(),
            tagline: "Your bookshelf, everywhere.".to_string(),
            core_features: vec!["Track books".to_string()],
            tech_stack: TechStack {
                frontend: "Next.js".to_string(),
                backend: "Server Actions".to_string(),
                database: "Firestore".to_string(),
                authentication: "Firebase Auth".to_string(),
            },
            data_models: vec![DataModel {
                name: "User".to_string(),
                properties: vec!["id: string".to_string()],
            }],
            pages: vec![PageSpec {
                name: "Home".to_string(),
                path: "/".to_string(),
                description: "Landing".to_string(),
            }],
            database_setup: Some(vec!["Create project".to_string()]),
            authentication_setup: None,
            api_integrations: None,
            deployment_steps: None,
        };

        let text = app_plan_markdown(&plan);
        assert!(text.starts_with("# ShelfShare"));
        assert!(text.contains("## Database Setup\n\n1. Create project"));
        assert!(!text.contains("## Authentication Setup"));
    }
}
