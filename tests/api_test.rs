//! Integration tests for API endpoints.
//!
//! Each test drives a fresh router backed by empty in-memory stores.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

use reminder_service::{create_router, AppState};

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    create_router(AppState::in_memory())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_user(app: &Router, email: &str, name: &str) -> Value {
    let (status, body) = call(
        app,
        Method::POST,
        "/users/",
        Some(json!({ "email": email, "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create user failed: {}", body);
    body
}

async fn create_reminder(app: &Router, owner_id: i64, title: &str) -> Value {
    let (status, body) = call(
        app,
        Method::POST,
        "/notifications/",
        Some(json!({
            "owner_id": owner_id,
            "title": title,
            "message": format!("{} is due", title)
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create reminder failed: {}", body);
    body
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = call(&app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = call(&app(), Method::GET, "/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Team Reminder Service");
    assert!(body["paths"]["/notifications/send/immediate/{owner_id}"].is_object());
}

#[tokio::test]
async fn unknown_route_is_structured_404() {
    let (status, body) = call(&app(), Method::GET, "/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not Found" }));
}

#[tokio::test]
async fn unsupported_method_is_structured_405() {
    let app = app();

    let (status, body) = call(&app, Method::DELETE, "/users/", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "detail": "Method Not Allowed" }));

    let (status, body) = call(&app, Method::GET, "/notifications/send/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "detail": "Method Not Allowed" }));
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn created_user_is_returned_and_listed() {
    let app = app();

    let user = create_user(&app, "ada@example.com", "Ada").await;
    assert_eq!(
        user,
        json!({ "id": 1, "email": "ada@example.com", "name": "Ada", "is_active": true })
    );

    let (status, list) = call(&app, Method::GET, "/users/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([user]));
}

#[tokio::test]
async fn new_user_id_exceeds_previous_ids() {
    let app = app();
    let first = create_user(&app, "a@example.com", "A").await;
    let second = create_user(&app, "b@example.com", "B").await;
    let third = create_user(&app, "c@example.com", "C").await;

    let ids: Vec<i64> = [&first, &second, &third]
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn collection_routes_accept_missing_trailing_slash() {
    let app = app();
    create_user(&app, "a@example.com", "A").await;

    let (status, list) = call(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_email_is_rejected_and_original_kept() {
    let app = app();
    let original = create_user(&app, "dup@example.com", "First").await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/users/",
        Some(json!({ "email": "dup@example.com", "name": "Second" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "User with this email already exists" }));

    let (status, fetched) = call(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, original);

    let (_, list) = call(&app, Method::GET, "/users/", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn email_domain_case_does_not_bypass_duplicate_check() {
    let app = app();
    let first = create_user(&app, "Ada@EXAMPLE.com", "First").await;
    assert_eq!(first["email"], "Ada@example.com");

    let (status, body) = call(
        &app,
        Method::POST,
        "/users/",
        Some(json!({ "email": "Ada@example.com", "name": "Second" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "User with this email already exists" }));

    // A different local-part case is a different address.
    let other = create_user(&app, "ada@example.com", "Third").await;
    assert_eq!(other["id"], 2);
}

#[tokio::test]
async fn invalid_email_is_a_validation_error() {
    let (status, body) = call(
        &app(),
        Method::POST,
        "/users/",
        Some(json!({ "email": "not-an-email", "name": "Bad" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "detail": "value is not a valid email address" }));
}

#[tokio::test]
async fn missing_field_is_a_validation_error() {
    let (status, body) = call(
        &app(),
        Method::POST,
        "/users/",
        Some(json!({ "email": "ada@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn unknown_user_is_soft_not_found() {
    let app = app();
    create_user(&app, "a@example.com", "A").await;

    let (status, body) = call(&app, Method::GET, "/users/99", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "detail": "User not found" }));
}

#[tokio::test]
async fn non_integer_user_id_is_a_validation_error() {
    let (status, body) = call(&app(), Method::GET, "/users/abc", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

// =============================================================================
// Reminders
// =============================================================================

#[tokio::test]
async fn reminder_defaults_are_applied() {
    let app = app();
    create_user(&app, "owner@example.com", "Owner").await;

    let reminder = create_reminder(&app, 1, "Standup").await;

    assert_eq!(reminder["id"], 1);
    assert_eq!(reminder["owner_id"], 1);
    assert_eq!(reminder["channel"], "email");
    assert_eq!(reminder["frequency"], "once");
    assert_eq!(reminder["time_of_day"], Value::Null);

    // Naive UTC with microseconds: `YYYY-MM-DDTHH:MM:SS.ffffff`
    let created_at = reminder["created_at"].as_str().unwrap();
    assert_eq!(created_at.len(), 26);
    assert_eq!(&created_at[10..11], "T");
    assert!(!created_at.ends_with('Z') && !created_at.contains('+'));
}

#[tokio::test]
async fn reminder_keeps_explicit_schedule_tags() {
    let app = app();
    create_user(&app, "owner@example.com", "Owner").await;

    let (status, reminder) = call(
        &app,
        Method::POST,
        "/notifications",
        Some(json!({
            "owner_id": 1,
            "title": "Retro",
            "message": "Bring notes",
            "channel": "slack",
            "time_of_day": "16:30:00",
            "frequency": "weekly"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reminder["channel"], "slack");
    assert_eq!(reminder["frequency"], "weekly");
    assert_eq!(reminder["time_of_day"], "16:30:00");
}

#[tokio::test]
async fn unknown_channel_is_a_validation_error() {
    let app = app();
    create_user(&app, "owner@example.com", "Owner").await;

    let (status, _) = call(
        &app,
        Method::POST,
        "/notifications/",
        Some(json!({
            "owner_id": 1,
            "title": "Retro",
            "message": "Bring notes",
            "channel": "carrier-pigeon"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn reminder_for_unknown_owner_is_rejected_and_not_stored() {
    let app = app();

    let (status, body) = call(
        &app,
        Method::POST,
        "/notifications/",
        Some(json!({ "owner_id": 5, "title": "t", "message": "m" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Owner user does not exist" }));

    let (_, list) = call(&app, Method::GET, "/notifications/user/5", None).await;
    assert_eq!(list, json!({ "items": [] }));

    // The rejected attempt did not consume an id.
    create_user(&app, "owner@example.com", "Owner").await;
    let reminder = create_reminder(&app, 1, "first").await;
    assert_eq!(reminder["id"], 1);
}

#[tokio::test]
async fn listing_for_owner_without_reminders_is_empty() {
    let app = app();
    create_user(&app, "owner@example.com", "Owner").await;

    let (status, body) = call(&app, Method::GET, "/notifications/user/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "items": [] }));
}

#[tokio::test]
async fn listing_returns_only_the_owners_reminders_in_order() {
    let app = app();
    create_user(&app, "a@example.com", "A").await;
    create_user(&app, "b@example.com", "B").await;
    create_reminder(&app, 1, "one").await;
    create_reminder(&app, 2, "other").await;
    create_reminder(&app, 1, "two").await;

    let (_, body) = call(&app, Method::GET, "/notifications/user/1", None).await;

    let titles: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["one", "two"]);
}

#[tokio::test]
async fn ids_are_sequential_per_store() {
    let app = app();
    create_user(&app, "a@example.com", "A").await;
    let r1 = create_reminder(&app, 1, "r1").await;
    create_user(&app, "b@example.com", "B").await;
    let r2 = create_reminder(&app, 2, "r2").await;
    let u3 = create_user(&app, "c@example.com", "C").await;

    assert_eq!(r1["id"], 1);
    assert_eq!(r2["id"], 2);
    assert_eq!(u3["id"], 3);
}

// =============================================================================
// Sending
// =============================================================================

#[tokio::test]
async fn single_send_misses_reminders_of_real_owners() {
    let app = app();
    create_user(&app, "owner@example.com", "Owner").await;
    let reminder = create_reminder(&app, 1, "Standup").await;
    let uri = format!("/notifications/send/{}", reminder["id"]);

    let (status, body) = call(&app, Method::POST, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "detail": "Reminder not found" }));
}

#[tokio::test]
async fn single_send_of_unknown_reminder_is_soft_not_found() {
    let (status, body) = call(&app(), Method::POST, "/notifications/send/12", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "detail": "Reminder not found" }));
}

#[tokio::test]
async fn immediate_send_returns_one_result_per_reminder() {
    let app = app();
    create_user(&app, "owner@example.com", "Owner").await;
    create_reminder(&app, 1, "a").await;
    create_reminder(&app, 1, "b").await;
    create_reminder(&app, 1, "c").await;

    let (status, body) = call(&app, Method::POST, "/notifications/send/immediate/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "reminder_id": 1, "success": true, "detail": "Sent synchronously (fake)" },
            { "reminder_id": 2, "success": true, "detail": "Sent synchronously (fake)" },
            { "reminder_id": 3, "success": true, "detail": "Sent synchronously (fake)" }
        ])
    );
}

#[tokio::test]
async fn immediate_send_without_reminders_is_404() {
    let app = app();
    create_user(&app, "owner@example.com", "Owner").await;

    let (status, body) = call(&app, Method::POST, "/notifications/send/immediate/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "No reminders for user" }));
}

#[tokio::test]
async fn immediate_send_for_unknown_owner_is_404() {
    let (status, _) = call(&app(), Method::POST, "/notifications/send/immediate/77", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
