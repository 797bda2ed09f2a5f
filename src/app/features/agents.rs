use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::{
    db,
    error::AppError,
    features::helpers::deserialize_optional_option,
    session::ApiAuthenticatedSession,
    tenant::{self, ResourceKind},
    AppState,
};

/// Request body for assigning an agent to a zone.
#[derive(Debug, Deserialize)]
pub struct AssignZoneRequest {
    /// Omit or null = clear the assignment.
    #[serde(default, deserialize_with = "deserialize_optional_option")]
    pub zone_id: Option<Option<String>>,
}

/// PUT /api/agents/:id/zone — Assign an agent to a zone, or clear the
/// assignment. Both the agent and the target zone must belong to the
/// caller's organization; an agent can never point at a foreign zone.
pub async fn assign_zone(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
    Json(request): Json<AssignZoneRequest>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::Agent, &agent_id, &organization_id).await?;

    let zone_id = request.zone_id.flatten();
    if let Some(zone_id) = &zone_id {
        tenant::require_in_org(&state.db, ResourceKind::Zone, zone_id, &organization_id).await?;
    }

    db::agents::update_zone(&state.db, &agent_id, zone_id.as_deref())
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true })))
}

/// Agent routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/agents/:id/zone", put(assign_zone))
}
