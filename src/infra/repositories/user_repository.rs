//! User repository implementation.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Write timestamps are taken from the clock at call time; callers
/// never supply them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored row
    async fn create(&self, name: String, dob: NaiveDate) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// List all users, newest first
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Case-insensitive substring match on name, newest first
    async fn search_by_name(&self, term: &str) -> AppResult<Vec<User>>;

    /// Overwrite name and date of birth, refreshing `updated_at`.
    ///
    /// Returns `None` when no row has this ID.
    async fn update(&self, id: i32, name: String, dob: NaiveDate) -> AppResult<Option<User>>;

    /// Delete by ID, returning the number of rows removed (0 or 1)
    async fn delete(&self, id: i32) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Escape LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, name: String, dob: NaiveDate) -> AppResult<User> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name),
            dob: Set(dob),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .order_by_desc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<User>> {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

        let models = UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(user::Column::Name)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            )
            .order_by_desc(user::Column::CreatedAt)
            .order_by_desc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i32, name: String, dob: NaiveDate) -> AppResult<Option<User>> {
        // Single UPDATE ... RETURNING; created_at is never part of the SET list
        let active_model = ActiveModel {
            id: Unchanged(id),
            name: Set(name),
            dob: Set(dob),
            created_at: NotSet,
            updated_at: Set(Utc::now()),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(Some(User::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}
