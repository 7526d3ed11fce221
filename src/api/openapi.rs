//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::UserResponse;

/// OpenAPI documentation for the User Age API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Age API",
        version = "0.1.0",
        description = "CRUD API for user records with an age derived from date of birth",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        health_handler::health_check,
        user_handler::create_user,
        user_handler::list_users,
        user_handler::search_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            health_handler::HealthResponse,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
