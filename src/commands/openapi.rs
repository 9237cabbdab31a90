//! OpenAPI command - Prints the API description to stdout.

use utoipa::OpenApi;

use crate::api::ApiDoc;
use crate::cli::args::OpenapiArgs;
use crate::errors::{AppError, AppResult};

/// Execute the openapi command
pub async fn execute(args: OpenapiArgs) -> AppResult<()> {
    println!("{}", render(args.pretty)?);
    Ok(())
}

fn render(pretty: bool) -> AppResult<String> {
    let doc = ApiDoc::openapi();
    let json = if pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    };
    json.map_err(|e| AppError::internal(format!("Failed to serialize OpenAPI document: {}", e)))
}
