use promptforge_core::PromptRecord;
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::models::PromptRecordRow;

#[derive(Clone)]
pub struct PromptHistoryRepository {
    pool: SqlitePool,
}

impl PromptHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &PromptRecord) -> Result<(), DbError> {
        let row = PromptRecordRow::from(record);

        sqlx::query(
            r#"
            INSERT INTO prompt_records (id, user_id, idea, goal_type, generated_prompt, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.id)
        .bind(&row.user_id)
        .bind(&row.idea)
        .bind(&row.goal_type)
        .bind(&row.generated_prompt)
        .bind(row.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Records for one user, newest first. Ties on the second-resolution
    /// timestamp fall back to id order so the result is stable.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<PromptRecord>, DbError> {
        let rows: Vec<PromptRecordRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, idea, goal_type, generated_prompt, created_at
            FROM prompt_records
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_domain()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use chrono::{Duration, Utc};
    use promptforge_core::GoalType;

    async fn setup_test_db() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = setup_test_db().await;
        let repo = PromptHistoryRepository::new(pool);

        let record = PromptRecord::new("user-1", "A reading tracker", GoalType::App, "Build...");
        repo.create(&record).await.unwrap();

        let records = repo.list_for_user("user-1").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].idea, "A reading tracker");
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let pool = setup_test_db().await;
        let repo = PromptHistoryRepository::new(pool);

        let mut older = PromptRecord::new("user-1", "older idea here", GoalType::App, "p1");
        older.created_at = Utc::now() - Duration::hours(1);
        let newer = PromptRecord::new("user-1", "newer idea here", GoalType::Website, "p2");

        repo.create(&older).await.unwrap();
        repo.create(&newer).await.unwrap();

        let records = repo.list_for_user("user-1").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].idea, "newer idea here");
        assert_eq!(records[1].idea, "older idea here");
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_user() {
        let pool = setup_test_db().await;
        let repo = PromptHistoryRepository::new(pool);

        let record = PromptRecord::new("user-1", "an idea of mine", GoalType::App, "p");
        repo.create(&record).await.unwrap();

        let records = repo.list_for_user("user-2").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_empty_history_is_not_an_error() {
        let pool = setup_test_db().await;
        let repo = PromptHistoryRepository::new(pool);

        let records = repo.list_for_user("nobody").await.unwrap();
        assert!(records.is_empty());
    }
}
