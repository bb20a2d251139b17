//! User infrastructure: the service core and gateway implementations

pub mod mongo_repository;
pub mod repository;
pub mod service;

pub use mongo_repository::MongoUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{UserInput, UserService};
