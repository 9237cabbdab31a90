//! In-memory reminder repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{CreateReminder, Reminder};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Reminder repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Store a new reminder under the next sequential id, stamped with the current time
    async fn create(&self, data: CreateReminder) -> AppResult<Reminder>;

    /// List reminders of an owner in insertion order.
    ///
    /// An unknown owner and an owner without reminders both yield an empty list.
    async fn list_for_owner(&self, owner_id: i64) -> AppResult<Vec<Reminder>>;
}

struct ReminderTable {
    rows: BTreeMap<i64, Reminder>,
    next_id: i64,
}

/// Process-local reminder store. Contents are lost on restart.
pub struct ReminderStore {
    table: RwLock<ReminderTable>,
}

impl ReminderStore {
    /// Create an empty store; the first reminder gets id 1
    pub fn new() -> Self {
        Self {
            table: RwLock::new(ReminderTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReminderRepository for ReminderStore {
    async fn create(&self, data: CreateReminder) -> AppResult<Reminder> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let reminder = Reminder::new(id, data, Utc::now());
        table.rows.insert(id, reminder.clone());
        tracing::debug!(reminder_id = id, owner_id = reminder.owner_id, "Stored reminder");

        Ok(reminder)
    }

    async fn list_for_owner(&self, owner_id: i64) -> AppResult<Vec<Reminder>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }
}
