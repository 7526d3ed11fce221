//! User service - Validation, business rules and response shaping.
//!
//! Sits between the HTTP handlers and the repository. Dates of birth are
//! parsed and checked here, and every returned user carries an age computed
//! against today's UTC date.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::domain::{parse_dob, CreateUser, UpdateUser, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<UserResponse>;

    /// List all users, newest first (empty when there are none)
    async fn list_users(&self) -> AppResult<Vec<UserResponse>>;

    /// Case-insensitive name search, newest first
    async fn search_users(&self, name: &str) -> AppResult<Vec<UserResponse>>;

    /// Apply the supplied fields, keeping the rest
    async fn update_user(&self, id: i32, input: UpdateUser) -> AppResult<UserResponse>;

    /// Permanently delete a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService backed by a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

/// Current calendar date in UTC
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn require_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name is required"));
    }
    Ok(())
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse> {
        require_name(&input.name)?;
        let today = today();
        let dob = parse_dob(&input.dob, today)?;

        let user = self.repo.create(input.name, dob).await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(UserResponse::from_user(user, today))
    }

    async fn get_user(&self, id: i32) -> AppResult<UserResponse> {
        let user = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        Ok(UserResponse::from_user(user, today()))
    }

    async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let today = today();
        let users = self.repo.list().await?;

        Ok(users
            .into_iter()
            .map(|user| UserResponse::from_user(user, today))
            .collect())
    }

    async fn search_users(&self, name: &str) -> AppResult<Vec<UserResponse>> {
        if name.is_empty() {
            return Err(AppError::validation("name query parameter is required"));
        }

        let today = today();
        let users = self.repo.search_by_name(name).await?;

        Ok(users
            .into_iter()
            .map(|user| UserResponse::from_user(user, today))
            .collect())
    }

    async fn update_user(&self, id: i32, input: UpdateUser) -> AppResult<UserResponse> {
        let existing = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        let today = today();

        let name = match input.name() {
            Some(name) => {
                require_name(name)?;
                name.to_string()
            }
            None => existing.name,
        };
        let dob = match input.dob() {
            Some(raw) => parse_dob(raw, today)?,
            None => existing.dob,
        };

        // The row may have been deleted since the lookup above
        let user = self
            .repo
            .update(id, name, dob)
            .await?
            .ok_or_not_found()?;
        tracing::info!(user_id = id, "User updated");

        Ok(UserResponse::from_user(user, today))
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.find_by_id(id).await?.ok_or_not_found()?;

        if self.repo.delete(id).await? == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{calculate_age, User};
    use crate::infra::MockUserRepository;
    use chrono::{DateTime, Days, Duration};
    use mockall::predicate::eq;

    fn stored_user(id: i32, name: &str, dob: NaiveDate) -> User {
        let created: DateTime<Utc> = Utc::now() - Duration::days(3);
        User {
            id,
            name: name.to_string(),
            dob,
            created_at: created,
            updated_at: created,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(repo: MockUserRepository) -> UserManager<MockUserRepository> {
        UserManager::new(Arc::new(repo))
    }

    fn storage_error() -> AppError {
        AppError::Storage(sea_orm::DbErr::Custom("connection lost".to_string()))
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|name, dob| name == "Ada" && *dob == date(1990, 1, 1))
            .times(1)
            .returning(|name, dob| Ok(stored_user(1, &name, dob)));

        let response = service(repo)
            .create_user(CreateUser {
                name: "Ada".to_string(),
                dob: "1990-01-01".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Ada");
        assert_eq!(response.dob, "1990-01-01");
        assert_eq!(response.age, calculate_age(date(1990, 1, 1), today()));
    }

    #[tokio::test]
    async fn test_create_user_today_succeeds() {
        let born = today();
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|name, dob| Ok(stored_user(2, &name, dob)));

        let response = service(repo)
            .create_user(CreateUser {
                name: "Newborn".to_string(),
                dob: born.format("%Y-%m-%d").to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.age, 0);
    }

    #[tokio::test]
    async fn test_create_user_future_dob_rejected() {
        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let result = service(repo)
            .create_user(CreateUser {
                name: "Ada".to_string(),
                dob: tomorrow.format("%Y-%m-%d").to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_user_bad_input_rejected() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();
        let service = service(repo);

        let bad_date = service
            .create_user(CreateUser {
                name: "Ada".to_string(),
                dob: "01/01/1990".to_string(),
            })
            .await;
        assert!(matches!(bad_date, Err(AppError::Validation(_))));

        let blank_name = service
            .create_user(CreateUser {
                name: "   ".to_string(),
                dob: "1990-01-01".to_string(),
            })
            .await;
        assert!(matches!(blank_name, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(stored_user(id, "Grace", date(1985, 12, 9)))));

        let response = service(repo).get_user(5).await.unwrap();

        assert_eq!(response.id, 5);
        assert_eq!(response.name, "Grace");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_user(99).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_user_storage_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Err(storage_error()));

        let result = service(repo).get_user(1).await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_list_users_keeps_order_and_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).returning(|| {
            Ok(vec![
                stored_user(2, "Second", date(2000, 1, 1)),
                stored_user(1, "First", date(1990, 1, 1)),
            ])
        });
        let users = service(repo).list_users().await.unwrap();
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 1]);

        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));
        assert!(service(repo).list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_users() {
        let mut repo = MockUserRepository::new();
        repo.expect_search_by_name()
            .withf(|term| term.to_string() == "ad")
            .returning(|_| Ok(vec![stored_user(1, "Ada", date(1990, 1, 1))]));
        repo.expect_search_by_name()
            .withf(|term| term.to_string() == "zzz")
            .returning(|_| Ok(vec![]));
        let service = service(repo);

        let found = service.search_users("ad").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ada");

        assert!(service.search_users("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_users_requires_term() {
        let mut repo = MockUserRepository::new();
        repo.expect_search_by_name().never();

        let result = service(repo).search_users("").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_search_users_whitespace_term_is_searched() {
        let mut repo = MockUserRepository::new();
        repo.expect_search_by_name()
            .withf(|term| term.to_string() == " ")
            .times(1)
            .returning(|_| Ok(vec![stored_user(1, "Ada Lovelace", date(1815, 12, 10))]));

        let found = service(repo).search_users(" ").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_update_name_only_keeps_dob() {
        let dob = date(1990, 1, 1);
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(stored_user(id, "Ada", dob))));
        repo.expect_update()
            .withf(move |id, name, new_dob| *id == 1 && name == "Ada Lovelace" && *new_dob == dob)
            .times(1)
            .returning(|id, name, dob| Ok(Some(stored_user(id, &name, dob))));

        let response = service(repo)
            .update_user(
                1,
                UpdateUser {
                    name: Some("Ada Lovelace".to_string()),
                    dob: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(response.name, "Ada Lovelace");
        assert_eq!(response.dob, "1990-01-01");
    }

    #[tokio::test]
    async fn test_update_dob_only_keeps_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id, "Ada", date(1990, 1, 1)))));
        repo.expect_update()
            .withf(|_, name, dob| name == "Ada" && *dob == date(1991, 3, 4))
            .times(1)
            .returning(|id, name, dob| Ok(Some(stored_user(id, &name, dob))));

        let response = service(repo)
            .update_user(
                1,
                UpdateUser {
                    name: Some(String::new()),
                    dob: Some("1991-03-04".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.name, "Ada");
        assert_eq!(response.dob, "1991-03-04");
    }

    #[tokio::test]
    async fn test_update_invalid_dob_rejected() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id, "Ada", date(1990, 1, 1)))));
        repo.expect_update().never();

        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        let result = service(repo)
            .update_user(
                1,
                UpdateUser {
                    name: None,
                    dob: Some(tomorrow.format("%Y-%m-%d").to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let result = service(repo).update_user(42, UpdateUser::default()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_row_vanished_between_statements() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id, "Ada", date(1990, 1, 1)))));
        repo.expect_update().returning(|_, _, _| Ok(None));

        let result = service(repo).update_user(1, UpdateUser::default()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id, "Ada", date(1990, 1, 1)))));
        repo.expect_delete().with(eq(1)).times(1).returning(|_| Ok(1));

        assert!(service(repo).delete_user(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let result = service(repo).delete_user(1).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_already_gone() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id, "Ada", date(1990, 1, 1)))));
        repo.expect_delete().returning(|_| Ok(0));

        let result = service(repo).delete_user(1).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
