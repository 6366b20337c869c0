use crate::categories::repo::{Category, CategoryRepo};

#[derive(Clone)]
pub struct CategoryService {
    repo: CategoryRepo,
}

impl CategoryService {
    pub fn new(repo: CategoryRepo) -> Self {
        Self { repo }
    }

    pub async fn create(&self, name: &str) -> anyhow::Result<Category> {
        self.repo.create(name).await
    }

    pub async fn list(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Category>> {
        self.repo.list(limit, offset).await
    }
}
