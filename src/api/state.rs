//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{UserInput, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, input: UserInput) -> Result<User, DomainError>;
    async fn update(&self, id: &str, input: UserInput) -> Result<User, DomainError>;
    async fn find(&self, id: &str) -> Result<User, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        UserService::create(self, input).await
    }

    async fn update(&self, id: &str, input: UserInput) -> Result<User, DomainError> {
        UserService::update(self, id, input).await
    }

    async fn find(&self, id: &str) -> Result<User, DomainError> {
        UserService::find(self, id).await
    }
}
