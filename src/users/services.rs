use uuid::Uuid;

use crate::users::repo::{User, UserRepo};

/// Thin orchestration over the repository. Password hashing happens in the
/// handler; only the hash reaches this layer.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepo,
}

impl UserService {
    pub fn new(repo: UserRepo) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        self.repo.create(name, email, password_hash).await
    }

    pub async fn list(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<User>> {
        self.repo.list(limit, offset).await
    }

    pub async fn get(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        self.repo.get(id).await
    }
}
