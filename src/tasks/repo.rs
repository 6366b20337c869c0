use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Task record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub completed: bool,
    pub priority: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct TaskRepo {
    db: PgPool,
}

impl TaskRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: &str,
        description: Option<&str>,
        category_id: Option<Uuid>,
        priority: i32,
    ) -> anyhow::Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, category_id, priority)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, category_id, completed, priority, created_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(category_id)
        .bind(priority)
        .fetch_one(&self.db)
        .await?;
        Ok(task)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Task>> {
        let rows = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, category_id, completed, priority, created_at
            FROM tasks
            ORDER BY created_at
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, category_id, completed, priority, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(task)
    }

    /// Partial update; NULL binds keep stored values via COALESCE. Returns
    /// None when the id does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        completed: Option<bool>,
        priority: Option<i32>,
    ) -> anyhow::Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                completed = COALESCE($4, completed),
                priority = COALESCE($5, priority)
            WHERE id = $1
            RETURNING id, title, description, category_id, completed, priority, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(completed)
        .bind(priority)
        .fetch_optional(&self.db)
        .await?;
        Ok(task)
    }

    /// Returns true when a row was deleted.
    pub async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
