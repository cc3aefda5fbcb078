use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Goal category a generated prompt is tailored to.
///
/// Serialized with the display labels the frontend select box uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum GoalType {
    #[default]
    #[serde(rename = "Website Prompt")]
    Website,
    #[serde(rename = "App Prompt")]
    App,
    #[serde(rename = "Business Idea Prompt")]
    BusinessIdea,
    #[serde(rename = "Content Creator Prompt")]
    ContentCreator,
    #[serde(rename = "AI Agent Prompt")]
    AiAgent,
    #[serde(rename = "Image Generation Prompt")]
    ImageGeneration,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "Website Prompt",
            Self::App => "App Prompt",
            Self::BusinessIdea => "Business Idea Prompt",
            Self::ContentCreator => "Content Creator Prompt",
            Self::AiAgent => "AI Agent Prompt",
            Self::ImageGeneration => "Image Generation Prompt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Website Prompt" => Some(Self::Website),
            "App Prompt" => Some(Self::App),
            "Business Idea Prompt" => Some(Self::BusinessIdea),
            "Content Creator Prompt" => Some(Self::ContentCreator),
            "AI Agent Prompt" => Some(Self::AiAgent),
            "Image Generation Prompt" => Some(Self::ImageGeneration),
            _ => None,
        }
    }

    pub fn all() -> &'static [GoalType] {
        &[
            Self::Website,
            Self::App,
            Self::BusinessIdea,
            Self::ContentCreator,
            Self::AiAgent,
            Self::ImageGeneration,
        ]
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_type_round_trip() {
        for goal in GoalType::all() {
            assert_eq!(GoalType::parse(goal.as_str()), Some(*goal));
        }
    }

    #[test]
    fn test_goal_type_parse_unknown() {
        assert_eq!(GoalType::parse("Video Prompt"), None);
    }

    #[test]
    fn test_goal_type_serde_labels() {
        let json = serde_json::to_string(&GoalType::App).unwrap();
        assert_eq!(json, "\"App Prompt\"");

        let parsed: GoalType = serde_json::from_str("\"Image Generation Prompt\"").unwrap();
        assert_eq!(parsed, GoalType::ImageGeneration);
    }
}
