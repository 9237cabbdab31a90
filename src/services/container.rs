//! Service Container - Centralized service access.
//!
//! Wires services to a shared Unit of Work and notifier. Handlers never
//! reach the stores directly; they go through the services handed out here.

use std::sync::Arc;

use super::{Notifier, ReminderManager, ReminderService, SimulatedNotifier, UserManager, UserService};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get reminder service
    fn reminders(&self) -> Arc<dyn ReminderService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    reminder_service: Arc<dyn ReminderService>,
}

impl Services {
    /// Create services over the given persistence and notifier
    pub fn from_persistence(persistence: Arc<Persistence>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            user_service: Arc::new(UserManager::new(persistence.clone())),
            reminder_service: Arc::new(ReminderManager::new(persistence, notifier)),
        }
    }

    /// Fresh in-memory stores with the simulated notifier
    pub fn in_memory() -> Self {
        Self::from_persistence(
            Arc::new(Persistence::in_memory()),
            Arc::new(SimulatedNotifier::new()),
        )
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn reminders(&self) -> Arc<dyn ReminderService> {
        self.reminder_service.clone()
    }
}
