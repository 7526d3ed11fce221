//! Domain layer - Core business entities and logic
//!
//! Contains the user entity, the request/response shapes and the
//! date-of-birth rules. Nothing here touches the database or HTTP.

pub mod birth_date;
pub mod user;

pub use birth_date::{calculate_age, parse_dob};
pub use user::{CreateUser, UpdateUser, User, UserResponse};
