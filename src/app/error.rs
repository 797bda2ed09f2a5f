use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::Error as SqlxError;

/// Application error type for unified error handling across the app.
///
/// Every JSON response, success or failure, carries the `{ ok, ... }`
/// envelope; errors render as `{ "ok": false, "error": <message> }`.
#[derive(Debug)]
pub enum AppError {
    /// No valid session (401). Distinct from NoOrganization: the caller
    /// must re-authenticate, not fix its account.
    Unauthenticated,

    /// Authenticated but no resolvable tenant (400).
    NoOrganization,

    /// Target resource missing or owned by another organization (403).
    /// The two cases are deliberately indistinguishable so responses do
    /// not leak whether a resource exists.
    Forbidden,

    /// Invalid input data (400) with a field-specific message.
    Validation(String),

    /// Underlying store operation failed (400, message surfaced).
    Database(SqlxError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthenticated => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::NoOrganization => (StatusCode::BAD_REQUEST, "No organization".to_string()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(err) => {
                tracing::error!(%err, "database error");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        };

        let body = Json(json!({
            "ok": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}
