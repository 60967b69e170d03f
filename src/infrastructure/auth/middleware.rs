use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::domain::translation::{Credential, PipelineError};
use crate::error::AppError;
use crate::infrastructure::config::Config;

pub const X_API_KEY: &str = "x-api-key";

/// Credential middleware
///
/// Resolves the translation backend credential for this request: the
/// `x-api-key` header when present, otherwise the operator default. Requests
/// without either are rejected before any handler runs.
pub async fn credential_middleware(
    State(config): State<Arc<Config>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let from_header = request
        .headers()
        .get(X_API_KEY)
        .and_then(|v| v.to_str().ok())
        .and_then(Credential::parse);

    let credential = from_header
        .or_else(|| config.gemini_api_key.as_deref().and_then(Credential::parse))
        .ok_or_else(|| AppError::from(PipelineError::MissingCredential))?;

    request.extensions_mut().insert(credential);

    Ok(next.run(request).await)
}
