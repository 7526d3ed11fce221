//! Application state - Dependency injection container.
//!
//! Built once at startup and cloned into every request; holds no
//! request-local or mutable data.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Wire the repository and service over the shared connection pool.
    pub fn from_database(database: &Database) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));
        Self::new(Arc::new(UserManager::new(repo)))
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
