//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Prefix shared by all user routes
pub const API_PREFIX: &str = "/api/v1";

// =============================================================================
// Environment
// =============================================================================

/// Environment name used when `ENV` is not set
pub const ENV_DEVELOPMENT: &str = "development";

/// Environment name that switches to quieter logging
pub const ENV_PRODUCTION: &str = "production";

// =============================================================================
// Database
// =============================================================================

/// Default upper bound on pooled database connections
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Dates
// =============================================================================

/// Wire format for dates of birth
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Wire format for created/updated timestamps (always UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

