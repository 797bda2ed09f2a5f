use axum::{extract::State, routing::patch, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::{
    db,
    error::AppError,
    features::helpers::non_blank,
    session::ApiAuthenticatedSession,
    tenant,
    AppState,
};

/// Request body for renaming the caller's organization.
#[derive(Debug, Deserialize)]
pub struct UpdateOrganizationRequest {
    pub name: String,
}

/// PATCH /api/organization/update — Rename the caller's organization.
/// The target is always the caller's own resolved organization, so no
/// separate ownership guard applies here.
pub async fn update(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Json(request): Json<UpdateOrganizationRequest>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;

    let name = non_blank(request.name)
        .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;
    if name.len() > 255 {
        return Err(AppError::Validation("Name is too long".to_string()));
    }

    db::organizations::update_name(&state.db, &organization_id, &name)
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true, "name": name })))
}

/// Organization routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/organization/update", patch(update))
}
