//! User domain
//!
//! Domain types for user records: the entity, the pure validation
//! rules, and the persistence gateway trait.

mod entity;
mod repository;
mod validation;

pub use entity::User;
pub use repository::UserRepository;
pub use validation::{validate, validate_age, validate_email, validate_name, ValidationFailure};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
