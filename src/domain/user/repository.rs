//! Persistence gateway trait for user storage

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Storage-facing gateway the service depends on.
///
/// All storage-technology specifics (document mapping, id encoding)
/// live behind this trait.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Look up a user by id
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user; the returned record carries the
    /// storage-assigned id
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user's record. `None` signals the record
    /// vanished between lookup and write (concurrent deletion).
    async fn update(&self, user: &User) -> Result<Option<User>, DomainError>;

    /// Check whether any *other* user shares (first_name, last_name).
    /// `exclude_id` scopes the check so a user can keep its own name.
    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock gateway for testing error propagation
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<String, User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every subsequent gateway call fail with a storage error
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        pub async fn insert_existing(&self, user: User) {
            let id = user.id().unwrap_or_default().to_string();
            self.users.write().await.insert(id, user);
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.get(id).cloned())
        }

        async fn insert(&self, user: User) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let stored = User::with_id(
                format!("mock-{}", self.users.read().await.len() + 1),
                user.first_name(),
                user.last_name(),
                user.email(),
                user.age(),
            );
            let id = stored.id().unwrap_or_default().to_string();
            self.users.write().await.insert(id, stored.clone());
            Ok(stored)
        }

        async fn update(&self, user: &User) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let id = user.id().unwrap_or_default().to_string();
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
            self.check_should_fail().await?;
            let users = self.users.read().await;

            Ok(users.values().any(|u| {
                u.first_name() == first_name
                    && u.last_name() == last_name
                    && u.id() != exclude_id
            }))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_insert_assigns_id() {
            let repo = MockUserRepository::new();

            let stored = repo
                .insert(User::new("John", "Doe", "john@doe.com", 21))
                .await
                .unwrap();

            assert!(stored.id().is_some());
        }

        #[tokio::test]
        async fn test_exists_by_name_excludes_own_id() {
            let repo = MockUserRepository::new();
            let user = User::with_id("user-1", "John", "Doe", "john@doe.com", 21);
            repo.insert_existing(user).await;

            let excluding_self = repo
                .exists_by_name("John", "Doe", Some("user-1"))
                .await
                .unwrap();
            let not_excluding = repo.exists_by_name("John", "Doe", None).await.unwrap();

            assert!(!excluding_self);
            assert!(not_excluding);
        }

        #[tokio::test]
        async fn test_update_missing_returns_none() {
            let repo = MockUserRepository::new();
            let user = User::with_id("ghost", "John", "Doe", "john@doe.com", 21);

            let result = repo.update(&user).await.unwrap();

            assert!(result.is_none());
        }

        #[tokio::test]
        async fn test_should_fail_surfaces_storage_error() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.find_by_id("user-1").await;

            assert!(matches!(result, Err(DomainError::Storage { .. })));
        }
    }
}
