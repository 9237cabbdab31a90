//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Sequential identifier, starting at 1
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    pub is_active: bool,
}

impl User {
    /// Create a new, active user
    pub fn new(id: i64, data: CreateUser) -> Self {
        Self {
            id,
            email: data.email,
            name: data.name,
            is_active: true,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    /// Email address, already normalized
    pub email: String,
    pub name: String,
}

/// Lowercase the domain part of an email address.
///
/// The local part is case-sensitive and kept as given.
pub fn normalize_email(raw: &str) -> String {
    match raw.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => raw.to_string(),
    }
}
