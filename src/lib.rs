//! User Onboarding API
//!
//! A small CRUD service managing user records (name, email, age) over a
//! JSON HTTP API, backed by MongoDB. The business core is the user
//! service: field validation and duplicate-identity enforcement around
//! a storage-agnostic persistence gateway.
//!
//! # Layers
//!
//! - [`domain`] - the user entity, pure validation rules, the
//!   persistence gateway trait, and the domain error taxonomy
//! - [`infrastructure`] - the user service orchestrator, MongoDB and
//!   in-memory gateway implementations, connection bootstrap, logging
//! - [`api`] - axum handlers, router, and error-to-status mapping
//! - [`cli`] - the `serve` entry point with graceful shutdown
//! - [`config`] - layered configuration (files + `APP__` env vars)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
