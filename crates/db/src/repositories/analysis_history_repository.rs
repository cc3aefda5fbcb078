use promptforge_core::AnalysisRecord;
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::models::AnalysisRecordRow;

#[derive(Clone)]
pub struct AnalysisHistoryRepository {
    pool: SqlitePool,
}

impl AnalysisHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &AnalysisRecord) -> Result<(), DbError> {
        let row = AnalysisRecordRow::try_from(record)?;

        sqlx::query(
            r#"
            INSERT INTO analysis_records (id, user_id, argument_text, analysis, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.id)
        .bind(&row.user_id)
        .bind(&row.argument_text)
        .bind(&row.analysis)
        .bind(row.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Records for one user, newest first, with stable id tie-break.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<AnalysisRecord>, DbError> {
        let rows: Vec<AnalysisRecordRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, argument_text, analysis, created_at
            FROM analysis_records
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }
}
