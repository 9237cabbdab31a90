//! Outcome of a (simulated) reminder send.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of sending one reminder. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SendResult {
    #[schema(example = 1)]
    pub reminder_id: i64,
    pub success: bool,
    #[schema(example = "Sent synchronously (fake)")]
    pub detail: Option<String>,
}

impl SendResult {
    /// Successful send with a detail message
    pub fn succeeded(reminder_id: i64, detail: impl Into<String>) -> Self {
        Self {
            reminder_id,
            success: true,
            detail: Some(detail.into()),
        }
    }
}
