use uuid::Uuid;

use crate::tasks::repo::{Task, TaskRepo};

#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepo,
}

impl TaskService {
    pub fn new(repo: TaskRepo) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        title: &str,
        description: Option<&str>,
        category_id: Option<Uuid>,
        priority: i32,
    ) -> anyhow::Result<Task> {
        self.repo.create(title, description, category_id, priority).await
    }

    pub async fn list(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Task>> {
        self.repo.list(limit, offset).await
    }

    pub async fn get(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        self.repo.get(id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        completed: Option<bool>,
        priority: Option<i32>,
    ) -> anyhow::Result<Option<Task>> {
        self.repo.update(id, title, description, completed, priority).await
    }

    pub async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        self.repo.delete(id).await
    }
}
