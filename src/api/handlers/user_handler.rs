//! User handlers.
//!
//! Error policy: creation conflicts are structured 400 errors, while a
//! lookup miss on `GET /users/{id}` answers 200 with `{"detail"}`.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::USER_NOT_FOUND;
use crate::domain::{normalize_email, CreateUser, User};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::SoftLookup;

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User email address
    #[validate(email(message = "value is not a valid email address"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "Ada Lovelace")]
    pub name: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: normalize_email(&req.email),
            name: req.name,
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Json<User>> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok(Json(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "All users in creation order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user, or `{\"detail\": \"User not found\"}` when it does not exist", body = User),
        (status = 422, description = "ID is not an integer", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<SoftLookup<User>> {
    let user = state.user_service.find_user(id).await?;
    Ok(SoftLookup::from_option(user, USER_NOT_FOUND))
}
