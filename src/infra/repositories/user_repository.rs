//! In-memory user repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{CreateUser, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under the next sequential id.
    ///
    /// Does not check for duplicate emails.
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// List all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
}

struct UserTable {
    rows: BTreeMap<i64, User>,
    next_id: i64,
}

/// Process-local user store. Contents are lost on restart.
pub struct UserStore {
    table: RwLock<UserTable>,
}

impl UserStore {
    /// Create an empty store; the first user gets id 1
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, data: CreateUser) -> AppResult<User> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let user = User::new(id, data);
        table.rows.insert(id, user.clone());
        tracing::debug!(user_id = id, "Stored user");

        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }
}
