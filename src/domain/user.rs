//! User domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::birth_date::calculate_age;
use crate::config::{DOB_FORMAT, TIMESTAMP_FORMAT};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User creation input; `dob` is still the raw `YYYY-MM-DD` string
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub dob: String,
}

/// Partial user update.
///
/// Absent or empty fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub dob: Option<String>,
}

impl UpdateUser {
    /// Name to apply, if one was supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Raw date of birth to apply, if one was supplied.
    pub fn dob(&self) -> Option<&str> {
        self.dob.as_deref().filter(|d| !d.is_empty())
    }
}

/// User response with the derived age
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User display name
    #[schema(example = "Ada")]
    pub name: String,
    /// Date of birth
    #[schema(example = "1990-01-01")]
    pub dob: String,
    /// Age in whole years as of today
    #[schema(example = 34)]
    pub age: i32,
    /// Creation timestamp (UTC)
    #[schema(example = "2024-06-01T12:00:00Z")]
    pub created_at: String,
    /// Last update timestamp (UTC)
    #[schema(example = "2024-06-01T12:00:00Z")]
    pub updated_at: String,
}

impl UserResponse {
    /// Shape a stored user for the wire, computing age as of `today`.
    pub fn from_user(user: User, today: NaiveDate) -> Self {
        Self {
            id: user.id,
            age: calculate_age(user.dob, today),
            dob: user.dob.format(DOB_FORMAT).to_string(),
            name: user.name,
            created_at: user.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: user.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
