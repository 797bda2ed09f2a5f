use axum::{
    extract::{Path, State},
    routing::patch,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::{
    db,
    error::AppError,
    features::helpers::non_blank,
    session::ApiAuthenticatedSession,
    tenant::{self, ResourceKind},
    AppState,
};

/// Request body for renaming a district.
#[derive(Debug, Deserialize)]
pub struct UpdateDistrictRequest {
    pub name: String,
}

/// PATCH /api/districts/:id — Rename a district.
pub async fn update(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(district_id): Path<String>,
    Json(request): Json<UpdateDistrictRequest>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::District, &district_id, &organization_id).await?;

    // Validation runs after the guard: callers outside the organization see
    // 403 and nothing else, whatever the body looks like.
    let name = non_blank(request.name)
        .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;
    if name.len() > 255 {
        return Err(AppError::Validation("Name is too long".to_string()));
    }

    db::districts::update_name(&state.db, &district_id, &name)
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true })))
}

/// DELETE /api/districts/:id — Delete a district. Zones underneath are
/// detached, not deleted (district_id is set NULL by the schema).
pub async fn delete(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(district_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::District, &district_id, &organization_id).await?;

    db::districts::delete(&state.db, &district_id)
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true })))
}

/// District routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/districts/:id", patch(update).delete(delete))
}
