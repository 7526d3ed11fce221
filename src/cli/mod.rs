//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Create the users table if missing

pub mod args;

pub use args::{Cli, Commands};
