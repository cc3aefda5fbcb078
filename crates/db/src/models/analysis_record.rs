use promptforge_core::AnalysisRecord;
use uuid::Uuid;

use super::{datetime_to_timestamp, timestamp_to_datetime};
use crate::error::DbError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnalysisRecordRow {
    pub id: String,
    pub user_id: String,
    pub argument_text: String,
    /// Structured analysis stored as a JSON document.
    pub analysis: String,
    pub created_at: i64,
}

impl AnalysisRecordRow {
    pub fn into_domain(self) -> Result<AnalysisRecord, DbError> {
        let analysis =
            serde_json::from_str(&self.analysis).map_err(|e| DbError::CorruptRecord {
                id: self.id.clone(),
                reason: e.to_string(),
            })?;

        Ok(AnalysisRecord {
            id: Uuid::parse_str(&self.id).unwrap_or_default(),
            user_id: self.user_id,
            text: self.argument_text,
            analysis,
            created_at: timestamp_to_datetime(self.created_at),
        })
    }
}

impl TryFrom<&AnalysisRecord> for AnalysisRecordRow {
    type Error = DbError;

    fn try_from(record: &AnalysisRecord) -> Result<Self, DbError> {
        let analysis = serde_json::to_string(&record.analysis).map_err(|e| {
            DbError::CorruptRecord {
                id: record.id.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            id: record.id.to_string(),
            user_id: record.user_id.clone(),
            argument_text: record.text.clone(),
            analysis,
            created_at: datetime_to_timestamp(record.created_at),
        })
    }
}
