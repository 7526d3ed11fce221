//! User Age API - CRUD service for user records with a derived age.
//!
//! Users are stored with a name and a date of birth. Every response
//! carries an `age` recomputed from the date of birth at read time,
//! so it is never persisted and never goes stale.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity, date-of-birth parsing and age calculation
//! - **services**: Validation, business rules and response shaping
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Create the users table without serving
//! cargo run -- migrate
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserResponse};
pub use errors::{AppError, AppResult};
