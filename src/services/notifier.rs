//! Notifier - Simulated reminder delivery.
//!
//! Nothing here enqueues, schedules or talks to an external provider.
//! Every send succeeds and only a result value is produced.

use chrono::{DateTime, Utc};

use crate::config::{IMMEDIATE_SEND_DETAIL, SCHEDULED_DETAIL_PREFIX};
use crate::domain::timestamp::format_naive_utc;
use crate::domain::{Reminder, SendResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Delivery backend used by the reminder service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Notifier: Send + Sync {
    /// Pretend to schedule a reminder for later delivery
    fn schedule_send(&self, reminder: &Reminder) -> SendResult;

    /// Pretend to deliver reminders right away, one result per reminder in input order
    fn send_immediately(&self, reminders: &[Reminder]) -> Vec<SendResult>;
}

/// Notifier that fabricates successful results.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedNotifier;

impl SimulatedNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for SimulatedNotifier {
    fn schedule_send(&self, reminder: &Reminder) -> SendResult {
        let result = SendResult::succeeded(reminder.id, scheduled_detail(Utc::now()));
        tracing::debug!(reminder_id = reminder.id, "Scheduled reminder send (simulated)");
        result
    }

    fn send_immediately(&self, reminders: &[Reminder]) -> Vec<SendResult> {
        tracing::debug!(count = reminders.len(), "Sending reminders (simulated)");
        reminders
            .iter()
            .map(|r| SendResult::succeeded(r.id, IMMEDIATE_SEND_DETAIL))
            .collect()
    }
}

/// `Scheduled at <timestamp>` with a naive ISO-8601 UTC timestamp
fn scheduled_detail(now: DateTime<Utc>) -> String {
    format!("{} {}", SCHEDULED_DETAIL_PREFIX, format_naive_utc(&now))
}
