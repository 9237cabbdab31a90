//! Infrastructure layer - Storage concerns
//!
//! This module holds the in-memory repositories and the Unit of Work
//! that hands them to services.

pub mod repositories;
pub mod unit_of_work;

pub use repositories::{ReminderRepository, ReminderStore, UserRepository, UserStore};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockReminderRepository, MockUserRepository};
