//! User service - create/update/find orchestration

use std::sync::Arc;

use tracing::warn;

use crate::domain::user::{validate, User, UserRepository};
use crate::domain::DomainError;

/// Candidate user fields as submitted by a caller; the id is never part
/// of the input (assigned by storage on create, a path parameter on
/// update).
#[derive(Debug, Clone)]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
}

/// Core user service enforcing validation and duplicate-identity rules
/// around the persistence gateway. Transport-agnostic: it never sees
/// HTTP types and never inspects storage internals.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user.
    ///
    /// Validation runs before any storage round-trip; the duplicate-name
    /// check runs before the insert. The check-then-insert sequence is
    /// not atomic: two concurrent creates for the same name can both
    /// pass the existence check. That window is accepted here and
    /// closing it belongs to the storage layer.
    pub async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        let candidate = User::new(input.first_name, input.last_name, input.email, input.age);

        let failures = validate(&candidate);
        if !failures.is_empty() {
            warn!(?failures, "rejected user candidate");
            return Err(DomainError::validation(failures));
        }

        let duplicate = self
            .repository
            .exists_by_name(candidate.first_name(), candidate.last_name(), None)
            .await?;
        if duplicate {
            return Err(DomainError::DuplicateIdentity);
        }

        self.repository.insert(candidate).await
    }

    /// Update an existing user by full-record replacement.
    ///
    /// The duplicate-name check excludes the candidate's own id, so a
    /// user keeps its name without conflicting with itself. A record
    /// that vanishes between the lookup and the write surfaces as
    /// `NotFound`, not a storage error.
    pub async fn update(&self, id: &str, input: UserInput) -> Result<User, DomainError> {
        let candidate = User::with_id(id, input.first_name, input.last_name, input.email, input.age);

        let failures = validate(&candidate);
        if !failures.is_empty() {
            warn!(?failures, "rejected user candidate");
            return Err(DomainError::validation(failures));
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound)?;

        let duplicate = self
            .repository
            .exists_by_name(candidate.first_name(), candidate.last_name(), Some(id))
            .await?;
        if duplicate {
            return Err(DomainError::DuplicateIdentity);
        }

        self.repository
            .update(&candidate)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// Look up a user by id
    pub async fn find(&self, id: &str) -> Result<User, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound)
    }
}
