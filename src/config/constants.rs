//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Service title used in logs and the OpenAPI document
pub const APP_TITLE: &str = "Team Reminder Service";

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

// =============================================================================
// Response Messages
// =============================================================================

/// Status reported by the health endpoint
pub const HEALTH_STATUS_OK: &str = "ok";

/// Rejection when a user with the same email is already stored
pub const USER_EMAIL_CONFLICT: &str = "User with this email already exists";

/// Soft-miss detail for `GET /users/{id}`
pub const USER_NOT_FOUND: &str = "User not found";

/// Rejection when a reminder references an unknown owner
pub const OWNER_NOT_FOUND: &str = "Owner user does not exist";

/// Soft-miss detail for `POST /notifications/send/{reminder_id}`
pub const REMINDER_NOT_FOUND: &str = "Reminder not found";

/// Rejection when an immediate send finds nothing to send
pub const NO_REMINDERS_FOR_USER: &str = "No reminders for user";

// =============================================================================
// Notifications
// =============================================================================

/// Owner id used to gather candidates for a single scheduled send.
///
/// The lookup never uses the reminder's real owner, so only reminders owned
/// by id 0 can be scheduled through that endpoint.
pub const SINGLE_SEND_LOOKUP_OWNER_ID: i64 = 0;

/// Status reported for a scheduled single send
pub const SEND_STATUS_SCHEDULED: &str = "scheduled";

/// Prefix of the detail attached to a scheduled send
pub const SCHEDULED_DETAIL_PREFIX: &str = "Scheduled at";

/// Detail attached to every immediate send
pub const IMMEDIATE_SEND_DETAIL: &str = "Sent synchronously (fake)";
