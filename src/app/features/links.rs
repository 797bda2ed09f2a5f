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
    features::helpers::{deserialize_optional_option, non_blank},
    session::ApiAuthenticatedSession,
    tenant::{self, ResourceKind},
    AppState,
};

/// Request body for updating a tracked link (partial update).
/// Omit = unchanged, null = clear.
#[derive(Debug, Deserialize)]
pub struct UpdateLinkRequest {
    #[serde(default, deserialize_with = "deserialize_optional_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_optional_option")]
    pub redirect_url: Option<Option<String>>,
}

const MAX_TEXT_LEN: usize = 2000;

fn check_text_len(value: &Option<Option<String>>, field: &str) -> Result<(), AppError> {
    if let Some(Some(text)) = value {
        if text.len() > MAX_TEXT_LEN {
            return Err(AppError::Validation(format!("{} is too long", field)));
        }
    }
    Ok(())
}

/// PATCH /api/links/:id — Update a tracked link's description/redirect URL.
/// Slug, strategy, and destination URLs are managed at creation and through
/// the activation redirect config; they are not client-settable here.
pub async fn update(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(link_id): Path<String>,
    Json(request): Json<UpdateLinkRequest>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::Link, &link_id, &organization_id).await?;

    check_text_len(&request.description, "description")?;
    check_text_len(&request.redirect_url, "redirect_url")?;

    let link = db::tracked_links::find_by_id(&state.db, &link_id)
        .await
        .map_err(AppError::Database)?
        .ok_or(AppError::Forbidden)?;

    let description = match request.description {
        Some(value) => value.and_then(non_blank),
        None => link.description,
    };
    let redirect_url = match request.redirect_url {
        Some(value) => value.and_then(non_blank),
        None => link.redirect_url,
    };

    db::tracked_links::update(&state.db, &link_id, description.as_deref(), redirect_url.as_deref())
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true })))
}

/// DELETE /api/links/:id — Delete a tracked link. The slug stops resolving
/// immediately; subsequent scans land on the default destination.
pub async fn delete(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(link_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::Link, &link_id, &organization_id).await?;

    db::tracked_links::delete(&state.db, &link_id)
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true })))
}

/// Tracked link routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/links/:id", patch(update).delete(delete))
}
