//! Application services layer - Use cases and business logic.
//!
//! Services depend on the repository trait rather than a concrete
//! store, so they can be exercised without a database.

mod user_service;

pub use user_service::{UserManager, UserService};
