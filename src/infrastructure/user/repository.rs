//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of the persistence gateway. Backs the
/// service tests and local runs without a database.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with existing users (ids required)
    pub fn with_users(users: Vec<User>) -> Self {
        let map = users
            .into_iter()
            .filter_map(|u| u.id().map(|id| (id.to_string(), u.clone())))
            .collect();

        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let id = Uuid::new_v4().to_string();
        let stored = User::with_id(
            id.clone(),
            user.first_name(),
            user.last_name(),
            user.email(),
            user.age(),
        );

        self.users.write().await.insert(id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, user: &User) -> Result<Option<User>, DomainError> {
        let id = match user.id() {
            Some(id) => id.to_string(),
            None => return Ok(None),
        };

        let mut users = self.users.write().await;

        if !users.contains_key(&id) {
            return Ok(None);
        }

        users.insert(id, user.clone());

        Ok(Some(user.clone()))
    }

    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, DomainError> {
        let users = self.users.read().await;

        Ok(users.values().any(|u| {
            u.first_name() == first_name && u.last_name() == last_name && u.id() != exclude_id
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john_doe() -> User {
        User::new("John", "Doe", "john@doe.com", 21)
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUserRepository::new();

        let stored = repo.insert(john_doe()).await.unwrap();
        let id = stored.id().unwrap();

        assert!(!id.is_empty());

        let found = repo.find_by_id(id).await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = InMemoryUserRepository::new();

        let found = repo.find_by_id("missing").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insert_preserves_fields() {
        let repo = InMemoryUserRepository::new();

        let stored = repo.insert(john_doe()).await.unwrap();

        assert_eq!(stored.first_name(), "John");
        assert_eq!(stored.last_name(), "Doe");
        assert_eq!(stored.email(), "john@doe.com");
        assert_eq!(stored.age(), 21);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let repo = InMemoryUserRepository::new();
        let stored = repo.insert(john_doe()).await.unwrap();
        let id = stored.id().unwrap();

        let replacement = User::with_id(id, "Johnny", "Doe", "johnny@doe.com", 22);
        let updated = repo.update(&replacement).await.unwrap();

        assert_eq!(updated, Some(replacement.clone()));
        assert_eq!(repo.find_by_id(id).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryUserRepository::new();
        let ghost = User::with_id("ghost", "John", "Doe", "john@doe.com", 21);

        let result = repo.update(&ghost).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_exists_by_name() {
        let repo = InMemoryUserRepository::new();
        repo.insert(john_doe()).await.unwrap();

        assert!(repo.exists_by_name("John", "Doe", None).await.unwrap());
        assert!(!repo.exists_by_name("Jane", "Doe", None).await.unwrap());
        assert!(!repo.exists_by_name("John", "Smith", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_by_name_excludes_given_id() {
        let repo = InMemoryUserRepository::new();
        let stored = repo.insert(john_doe()).await.unwrap();
        let id = stored.id().unwrap();

        assert!(!repo.exists_by_name("John", "Doe", Some(id)).await.unwrap());
        assert!(repo
            .exists_by_name("John", "Doe", Some("other-id"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_with_users_seeds_records() {
        let seeded = User::with_id("user-1", "John", "Doe", "john@doe.com", 21);
        let repo = InMemoryUserRepository::with_users(vec![seeded.clone()]);

        assert_eq!(repo.find_by_id("user-1").await.unwrap(), Some(seeded));
    }
}
