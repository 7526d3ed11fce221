//! Repository layer - Data access abstraction
//!
//! Repositories translate domain operations into parameterized statements
//! against the `users` table. A lookup that matches no row yields `None`,
//! never an error.

pub mod entities;
mod user_repository;

pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
