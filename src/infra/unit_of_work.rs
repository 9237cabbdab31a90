//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories so services depend on a single
//! handle instead of individual stores. The in-memory stores have no
//! transactions; each repository call is atomic on its own.

use std::sync::Arc;

use super::repositories::{ReminderRepository, ReminderStore, UserRepository, UserStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get reminder repository
    fn reminders(&self) -> Arc<dyn ReminderRepository>;
}

/// Repository handle shared by all services.
///
/// The user and reminder stores keep separate id sequences.
pub struct Persistence {
    users: Arc<dyn UserRepository>,
    reminders: Arc<dyn ReminderRepository>,
}

impl Persistence {
    /// Wrap existing repositories
    pub fn new(users: Arc<dyn UserRepository>, reminders: Arc<dyn ReminderRepository>) -> Self {
        Self { users, reminders }
    }

    /// Fresh, empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(Arc::new(UserStore::new()), Arc::new(ReminderStore::new()))
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn reminders(&self) -> Arc<dyn ReminderRepository> {
        self.reminders.clone()
    }
}
