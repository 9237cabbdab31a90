//! Reminder domain entity and its schedule tags.
//!
//! `channel` and `frequency` are descriptive only; nothing in the service
//! delivers over a channel or repeats on a cadence.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Delivery medium tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Email,
    Slack,
    Sms,
}

/// Intended repeat cadence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Once,
    Daily,
    Weekly,
}

/// Reminder domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reminder {
    #[schema(example = 1)]
    pub id: i64,
    /// Id of the owning user, checked only at creation
    #[schema(example = 1)]
    pub owner_id: i64,
    #[schema(example = "Standup")]
    pub title: String,
    #[schema(example = "Daily standup in five minutes")]
    pub message: String,
    pub channel: Channel,
    /// Wall-clock time of day
    #[schema(value_type = Option<String>, example = "09:30:00")]
    pub time_of_day: Option<NaiveTime>,
    pub frequency: Frequency,
    /// Naive UTC, microsecond precision
    #[serde(with = "crate::domain::timestamp::naive_utc")]
    #[schema(value_type = String, example = "2024-01-01T09:00:00.000000")]
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    /// Build a stored reminder from its creation payload
    pub fn new(id: i64, data: CreateReminder, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            owner_id: data.owner_id,
            title: data.title,
            message: data.message,
            channel: data.channel,
            time_of_day: data.time_of_day,
            frequency: data.frequency,
            created_at,
        }
    }
}

/// Reminder creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReminder {
    pub owner_id: i64,
    pub title: String,
    pub message: String,
    pub channel: Channel,
    pub time_of_day: Option<NaiveTime>,
    pub frequency: Frequency,
}

/// Reminders of a single owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReminderList {
    pub items: Vec<Reminder>,
}
