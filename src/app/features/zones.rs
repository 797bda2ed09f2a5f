use axum::{
    extract::{Path, State},
    routing::{patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::{
    db,
    error::AppError,
    features::helpers::{deserialize_optional_option, non_blank},
    session::ApiAuthenticatedSession,
    tenant::{self, ResourceKind},
    AppState,
};

/// Request body for creating a zone under a district.
#[derive(Debug, Deserialize)]
pub struct CreateZoneRequest {
    pub name: String,
    pub district_id: String,
}

/// POST /api/zones/create — Create a zone under a district.
/// organization_id and activation_id are copied from the parent district,
/// never taken from the client, so the denormalized copy transitively
/// equals the activation's organization.
pub async fn create(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Json(request): Json<CreateZoneRequest>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;

    // The parent district names the guard target, so it is resolved first;
    // name validation waits until the caller is known to own that district.
    let district_id = non_blank(request.district_id)
        .ok_or_else(|| AppError::Validation("District is required".to_string()))?;
    tenant::require_in_org(&state.db, ResourceKind::District, &district_id, &organization_id).await?;

    let name = non_blank(request.name)
        .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;
    if name.len() > 255 {
        return Err(AppError::Validation("Name is too long".to_string()));
    }

    let district = db::districts::find_by_id(&state.db, &district_id)
        .await
        .map_err(AppError::Database)?
        .ok_or(AppError::Forbidden)?;

    let zone = db::zones::NewZone {
        id: ulid::Ulid::new().to_string(),
        name,
        district_id: district.id,
        activation_id: district.activation_id,
        organization_id: district.organization_id,
    };
    db::zones::insert(&state.db, &zone)
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true, "zone": { "id": zone.id } })))
}

/// Request body for updating a zone (partial update).
#[derive(Debug, Deserialize)]
pub struct UpdateZoneRequest {
    pub name: Option<String>,
    /// Omit = unchanged, null = detach the zone from its district.
    #[serde(default, deserialize_with = "deserialize_optional_option")]
    pub district_id: Option<Option<String>>,
}

/// PATCH /api/zones/:id — Update a zone's name and/or district assignment.
/// A new district must belong to the caller's organization too.
pub async fn update(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
    Json(request): Json<UpdateZoneRequest>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::Zone, &zone_id, &organization_id).await?;

    let zone = db::zones::find_by_id(&state.db, &zone_id)
        .await
        .map_err(AppError::Database)?
        .ok_or(AppError::Forbidden)?;

    let name = match request.name {
        Some(name) => {
            let name = non_blank(name)
                .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;
            if name.len() > 255 {
                return Err(AppError::Validation("Name is too long".to_string()));
            }
            name
        }
        None => zone.name,
    };

    let district_id = match request.district_id {
        // Reassign: the new district must be in the caller's organization.
        Some(Some(district_id)) => {
            tenant::require_in_org(&state.db, ResourceKind::District, &district_id, &organization_id)
                .await?;
            Some(district_id)
        }
        // Explicit null: detach.
        Some(None) => None,
        // Omitted: unchanged.
        None => zone.district_id,
    };

    db::zones::update(&state.db, &zone_id, &name, district_id.as_deref())
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true })))
}

/// DELETE /api/zones/:id — Delete a zone. Agents assigned to it are
/// unassigned, not deleted (zone_id is set NULL by the schema).
pub async fn delete(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::Zone, &zone_id, &organization_id).await?;

    db::zones::delete(&state.db, &zone_id)
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true })))
}

/// Zone routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/zones/create", post(create))
        .route("/api/zones/:id", patch(update).delete(delete))
}
