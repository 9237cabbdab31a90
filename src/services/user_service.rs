//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::USER_EMAIL_CONFLICT;
use crate::domain::{CreateUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user unless one with the same email already exists
    async fn create_user(&self, data: CreateUser) -> AppResult<User>;

    /// List all users, unfiltered and unpaginated
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Look up a user; a miss is `Ok(None)`
    async fn find_user(&self, id: i64) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        let users = self.uow.users();

        // Linear scan; the check and the insert are not atomic.
        let taken = users.list().await?.iter().any(|u| u.email == data.email);
        if taken {
            return Err(AppError::bad_request(USER_EMAIL_CONFLICT));
        }

        let user = users.create(data).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn find_user(&self, id: i64) -> AppResult<Option<User>> {
        self.uow.users().find_by_id(id).await
    }
}
