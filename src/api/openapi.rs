//! OpenAPI documentation configuration.
//!
//! Served as JSON at `/openapi.json` and printable with the `openapi` command.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, notification_handler, user_handler};
use crate::domain::{Channel, Frequency, Reminder, ReminderList, SendResult, User};
use crate::errors::ErrorResponse;

/// OpenAPI documentation for the Team Reminder Service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Team Reminder Service",
        version = "0.1.0",
        description = "Users, reminders and simulated reminder delivery",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        health_handler::health_check,
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        // Notification endpoints
        notification_handler::create_reminder,
        notification_handler::list_reminders_for_user,
        notification_handler::send_single_reminder,
        notification_handler::send_immediate_for_user,
    ),
    components(
        schemas(
            // Domain types
            User,
            Reminder,
            ReminderList,
            Channel,
            Frequency,
            SendResult,
            // Response bodies
            ErrorResponse,
            health_handler::HealthResponse,
            // Request bodies
            user_handler::CreateUserRequest,
            notification_handler::CreateReminderRequest,
            notification_handler::ScheduledSendResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Users", description = "User accounts"),
        (name = "Notifications", description = "Reminders and simulated sending")
    )
)]
pub struct ApiDoc;
