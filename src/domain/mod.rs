//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod notification;
pub mod reminder;
pub mod timestamp;
pub mod user;

pub use notification::SendResult;
pub use reminder::{Channel, CreateReminder, Frequency, Reminder, ReminderList};
pub use user::{normalize_email, CreateUser, User};
