//! Reminder and notification handlers.
//!
//! Error policy per route:
//! - `POST /notifications/`: unknown owner is a structured 400.
//! - `GET /notifications/user/{owner_id}`: never fails, may be empty.
//! - `POST /notifications/send/{reminder_id}`: a miss answers 200 `{"detail"}`.
//! - `POST /notifications/send/immediate/{owner_id}`: nothing to send is a structured 404.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::{REMINDER_NOT_FOUND, SEND_STATUS_SCHEDULED};
use crate::domain::{Channel, CreateReminder, Frequency, Reminder, ReminderList, SendResult};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::SoftLookup;

/// Reminder creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReminderRequest {
    /// Owning user, must exist
    #[schema(example = 1)]
    pub owner_id: i64,
    #[schema(example = "Standup")]
    pub title: String,
    #[schema(example = "Daily standup in five minutes")]
    pub message: String,
    #[serde(default)]
    pub channel: Channel,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "09:30:00")]
    pub time_of_day: Option<NaiveTime>,
    #[serde(default)]
    pub frequency: Frequency,
}

impl From<CreateReminderRequest> for CreateReminder {
    fn from(req: CreateReminderRequest) -> Self {
        Self {
            owner_id: req.owner_id,
            title: req.title,
            message: req.message,
            channel: req.channel,
            time_of_day: req.time_of_day,
            frequency: req.frequency,
        }
    }
}

/// Response of a scheduled single send
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduledSendResponse {
    #[schema(example = 1)]
    pub reminder_id: i64,
    #[schema(example = "scheduled")]
    pub status: String,
    #[schema(example = "Scheduled at 2024-01-01T09:00:00.000000")]
    pub detail: Option<String>,
}

impl From<SendResult> for ScheduledSendResponse {
    fn from(result: SendResult) -> Self {
        Self {
            reminder_id: result.reminder_id,
            status: SEND_STATUS_SCHEDULED.to_string(),
            detail: result.detail,
        }
    }
}

/// Create notification routes
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", post(create_reminder))
        .route("/notifications/", post(create_reminder))
        .route("/notifications/user/:owner_id", get(list_reminders_for_user))
        .route("/notifications/send/:reminder_id", post(send_single_reminder))
        .route(
            "/notifications/send/immediate/:owner_id",
            post(send_immediate_for_user),
        )
}

/// Create a reminder
#[utoipa::path(
    post,
    path = "/notifications/",
    tag = "Notifications",
    request_body = CreateReminderRequest,
    responses(
        (status = 200, description = "Reminder created", body = Reminder),
        (status = 400, description = "Owner user does not exist", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_reminder(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReminderRequest>,
) -> AppResult<Json<Reminder>> {
    let reminder = state.reminder_service.create_reminder(payload.into()).await?;
    Ok(Json(reminder))
}

/// List reminders of a user
#[utoipa::path(
    get,
    path = "/notifications/user/{owner_id}",
    tag = "Notifications",
    params(
        ("owner_id" = i64, Path, description = "Owner user ID")
    ),
    responses(
        (status = 200, description = "Reminders of the owner, possibly empty", body = ReminderList),
        (status = 422, description = "ID is not an integer", body = ErrorResponse)
    )
)]
pub async fn list_reminders_for_user(
    State(state): State<AppState>,
    ValidatedPath(owner_id): ValidatedPath<i64>,
) -> AppResult<Json<ReminderList>> {
    let items = state.reminder_service.list_for_owner(owner_id).await?;
    Ok(Json(ReminderList { items }))
}

/// Schedule a single reminder.
///
/// Only reminders owned by user id 0 are found; see
/// [`crate::services::ReminderService::schedule_send`].
#[utoipa::path(
    post,
    path = "/notifications/send/{reminder_id}",
    tag = "Notifications",
    params(
        ("reminder_id" = i64, Path, description = "Reminder ID")
    ),
    responses(
        (status = 200, description = "Scheduled, or `{\"detail\": \"Reminder not found\"}`", body = ScheduledSendResponse),
        (status = 422, description = "ID is not an integer", body = ErrorResponse)
    )
)]
pub async fn send_single_reminder(
    State(state): State<AppState>,
    ValidatedPath(reminder_id): ValidatedPath<i64>,
) -> AppResult<SoftLookup<ScheduledSendResponse>> {
    let result = state.reminder_service.schedule_send(reminder_id).await?;
    Ok(SoftLookup::from_option(
        result.map(ScheduledSendResponse::from),
        REMINDER_NOT_FOUND,
    ))
}

/// Send all reminders of a user right away
#[utoipa::path(
    post,
    path = "/notifications/send/immediate/{owner_id}",
    tag = "Notifications",
    params(
        ("owner_id" = i64, Path, description = "Owner user ID")
    ),
    responses(
        (status = 200, description = "One result per reminder", body = Vec<SendResult>),
        (status = 404, description = "No reminders for user", body = ErrorResponse),
        (status = 422, description = "ID is not an integer", body = ErrorResponse)
    )
)]
pub async fn send_immediate_for_user(
    State(state): State<AppState>,
    ValidatedPath(owner_id): ValidatedPath<i64>,
) -> AppResult<Json<Vec<SendResult>>> {
    let results = state.reminder_service.send_immediately(owner_id).await?;
    Ok(Json(results))
}
