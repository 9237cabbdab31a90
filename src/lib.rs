//! Team Reminder Service - users, reminders and simulated delivery over HTTP.
//!
//! All data lives in process memory and is lost on restart. Sending is
//! simulated: no email, Slack or SMS message ever leaves the process.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases and the simulated notifier
//! - **infra**: In-memory repositories and Unit of Work
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 8000
//!
//! # Print the OpenAPI document
//! cargo run -- openapi --pretty
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Reminder, SendResult, User};
pub use errors::{AppError, AppResult};
