use promptforge_core::{GoalType, PromptRecord};
use uuid::Uuid;

use super::{datetime_to_timestamp, timestamp_to_datetime};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PromptRecordRow {
    pub id: String,
    pub user_id: String,
    pub idea: String,
    pub goal_type: String,
    pub generated_prompt: String,
    pub created_at: i64,
}

impl PromptRecordRow {
    pub fn into_domain(self) -> PromptRecord {
        PromptRecord {
            id: Uuid::parse_str(&self.id).unwrap_or_default(),
            user_id: self.user_id,
            idea: self.idea,
            goal_type: GoalType::parse(&self.goal_type).unwrap_or_default(),
            generated_prompt: self.generated_prompt,
            created_at: timestamp_to_datetime(self.created_at),
        }
    }
}

impl From<&PromptRecord> for PromptRecordRow {
    fn from(record: &PromptRecord) -> Self {
        Self {
            id: record.id.to_string(),
            user_id: record.user_id.clone(),
            idea: record.idea.clone(),
            goal_type: record.goal_type.as_str().to_string(),
            generated_prompt: record.generated_prompt.clone(),
            created_at: datetime_to_timestamp(record.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_round_trip() {
        let record = PromptRecord::new("user-1", "A reading tracker", GoalType::App, "Build...");
        let row = PromptRecordRow::from(&record);
        let back = row.into_domain();

        assert_eq!(back.id, record.id);
        assert_eq!(back.goal_type, GoalType::App);
        assert_eq!(back.created_at.timestamp(), record.created_at.timestamp());
    }
}
