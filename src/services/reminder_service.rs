//! Reminder service - Reminder creation, listing and (simulated) sending.

use async_trait::async_trait;
use std::sync::Arc;

use super::Notifier;
use crate::config::{NO_REMINDERS_FOR_USER, OWNER_NOT_FOUND, SINGLE_SEND_LOOKUP_OWNER_ID};
use crate::domain::{CreateReminder, Reminder, SendResult};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Reminder service trait for dependency injection.
#[async_trait]
pub trait ReminderService: Send + Sync {
    /// Create a reminder; the owner must exist at this moment
    async fn create_reminder(&self, data: CreateReminder) -> AppResult<Reminder>;

    /// Reminders of an owner, empty for unknown owners
    async fn list_for_owner(&self, owner_id: i64) -> AppResult<Vec<Reminder>>;

    /// Schedule a single reminder.
    ///
    /// Candidates are gathered with [`SINGLE_SEND_LOOKUP_OWNER_ID`] rather than
    /// the reminder's owner, so any reminder not owned by that id is reported
    /// as `Ok(None)` even when it exists.
    async fn schedule_send(&self, reminder_id: i64) -> AppResult<Option<SendResult>>;

    /// Send every reminder of an owner right away; `NotFound` when there are none
    async fn send_immediately(&self, owner_id: i64) -> AppResult<Vec<SendResult>>;
}

/// Concrete implementation of ReminderService using Unit of Work.
pub struct ReminderManager<U: UnitOfWork> {
    uow: Arc<U>,
    notifier: Arc<dyn Notifier>,
}

impl<U: UnitOfWork> ReminderManager<U> {
    pub fn new(uow: Arc<U>, notifier: Arc<dyn Notifier>) -> Self {
        Self { uow, notifier }
    }
}

#[async_trait]
impl<U: UnitOfWork> ReminderService for ReminderManager<U> {
    async fn create_reminder(&self, data: CreateReminder) -> AppResult<Reminder> {
        if self.uow.users().find_by_id(data.owner_id).await?.is_none() {
            return Err(AppError::bad_request(OWNER_NOT_FOUND));
        }

        let reminder = self.uow.reminders().create(data).await?;
        tracing::info!(
            reminder_id = reminder.id,
            owner_id = reminder.owner_id,
            "Reminder created"
        );
        Ok(reminder)
    }

    async fn list_for_owner(&self, owner_id: i64) -> AppResult<Vec<Reminder>> {
        self.uow.reminders().list_for_owner(owner_id).await
    }

    async fn schedule_send(&self, reminder_id: i64) -> AppResult<Option<SendResult>> {
        let candidates = self
            .uow
            .reminders()
            .list_for_owner(SINGLE_SEND_LOOKUP_OWNER_ID)
            .await?;

        let result = candidates
            .iter()
            .find(|r| r.id == reminder_id)
            .map(|target| self.notifier.schedule_send(target));

        if result.is_none() {
            tracing::debug!(reminder_id, "No schedulable reminder found");
        }
        Ok(result)
    }

    async fn send_immediately(&self, owner_id: i64) -> AppResult<Vec<SendResult>> {
        let reminders = self.uow.reminders().list_for_owner(owner_id).await?;
        if reminders.is_empty() {
            return Err(AppError::not_found(NO_REMINDERS_FOR_USER));
        }

        let results = self.notifier.send_immediately(&reminders);
        tracing::info!(owner_id, sent = results.len(), "Reminders sent");
        Ok(results)
    }
}
