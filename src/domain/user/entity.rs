//! User entity

/// User record managed by the service.
///
/// The identifier is assigned by the persistence layer on insert; a user
/// built from request input carries no id until it has been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Storage-assigned identifier, absent until persisted
    id: Option<String>,
    first_name: String,
    last_name: String,
    email: String,
    age: i32,
}

impl User {
    /// Create a transient user without an id (pre-persistence)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            age,
        }
    }

    /// Create a user with a known id (updates and storage reads)
    pub fn with_id(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
    ) -> Self {
        Self {
            id: Some(id.into()),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            age,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}
