//! User validation rules

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::User;

/// Reasons a candidate user is rejected before any storage interaction
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("user first and last name cannot be empty")]
    InvalidName,

    #[error("invalid email")]
    InvalidEmail,

    #[error("user must be at least 18 years old")]
    InvalidAge,
}

const MINIMUM_AGE: i32 = 18;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validate a candidate user against every rule.
///
/// All rules are evaluated independently; no rule short-circuits the
/// others, and failures are returned in rule order (name, email, age).
/// A valid user yields an empty Vec, never a null-like marker, so
/// callers can test emptiness uniformly.
pub fn validate(user: &User) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if let Err(failure) = validate_name(user.first_name(), user.last_name()) {
        failures.push(failure);
    }
    if let Err(failure) = validate_email(user.email()) {
        failures.push(failure);
    }
    if let Err(failure) = validate_age(user.age()) {
        failures.push(failure);
    }

    failures
}

/// Both first and last name must be non-empty
pub fn validate_name(first_name: &str, last_name: &str) -> Result<(), ValidationFailure> {
    if first_name.is_empty() || last_name.is_empty() {
        return Err(ValidationFailure::InvalidName);
    }

    Ok(())
}

/// Email must match the address pattern; the empty string fails too
pub fn validate_email(email: &str) -> Result<(), ValidationFailure> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationFailure::InvalidEmail);
    }

    Ok(())
}

/// Age must be at least 18
pub fn validate_age(age: i32) -> Result<(), ValidationFailure> {
    if age < MINIMUM_AGE {
        return Err(ValidationFailure::InvalidAge);
    }

    Ok(())
}
