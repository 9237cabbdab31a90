//! Application state - Dependency injection container.
//!
//! Provides handlers with the services they need. Store lifetime is tied
//! to the state: dropping every clone drops the data.

use std::sync::Arc;

use crate::services::{ReminderService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Reminder service
    pub reminder_service: Arc<dyn ReminderService>,
}

impl AppState {
    /// Create new application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        reminder_service: Arc<dyn ReminderService>,
    ) -> Self {
        Self {
            user_service,
            reminder_service,
        }
    }

    /// Create application state from a service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self::new(container.users(), container.reminders())
    }

    /// State backed by fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::from_container(&Services::in_memory())
    }
}
