//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Both stores keep their rows in process memory.

mod reminder_repository;
mod user_repository;

pub use reminder_repository::{ReminderRepository, ReminderStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use reminder_repository::MockReminderRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
