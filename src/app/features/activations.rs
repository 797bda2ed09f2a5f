use axum::{
    extract::{Path, State},
    routing::{get, patch},
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

/// GET /api/activations/list — All activations for the caller's organization.
/// A caller with no resolvable tenant gets an empty list, not an error:
/// the dashboard renders the same page either way.
pub async fn list(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::resolve_organization(&state.db, &session.user_id)
        .await
        .map_err(AppError::Database)?;

    let items = match organization_id {
        Some(organization_id) => {
            db::activations::list_for_organization(&state.db, &organization_id)
                .await
                .map_err(AppError::Database)?
        }
        None => Vec::new(),
    };

    Ok(Json(json!({ "ok": true, "items": items })))
}

/// Request body for updating an activation's redirect configuration
/// (partial update). Omit = unchanged, null = clear.
#[derive(Debug, Deserialize)]
pub struct UpdateRedirectsRequest {
    #[serde(default, deserialize_with = "deserialize_optional_option")]
    pub default_redirect_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_optional_option")]
    pub android_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_optional_option")]
    pub ios_url: Option<Option<String>>,
}

/// 2000 keeps destination URLs within what scanners and stores accept.
const MAX_URL_LEN: usize = 2000;

fn check_url_len(value: &Option<Option<String>>, field: &str) -> Result<(), AppError> {
    if let Some(Some(url)) = value {
        if url.len() > MAX_URL_LEN {
            return Err(AppError::Validation(format!("{} is too long", field)));
        }
    }
    Ok(())
}

/// PATCH /api/activations/:id/redirects — Update redirect destinations.
/// Ownership is checked like every other mutation; redirect config steers
/// live traffic and is not less sensitive than the rest.
pub async fn update_redirects(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(activation_id): Path<String>,
    Json(request): Json<UpdateRedirectsRequest>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::Activation, &activation_id, &organization_id).await?;

    check_url_len(&request.default_redirect_url, "default_redirect_url")?;
    check_url_len(&request.android_url, "android_url")?;
    check_url_len(&request.ios_url, "ios_url")?;

    let activation = db::activations::find_by_id(&state.db, &activation_id)
        .await
        .map_err(AppError::Database)?
        .ok_or(AppError::Forbidden)?;

    // Merge provided fields with existing values; blank strings clear.
    let default_redirect_url = match request.default_redirect_url {
        Some(value) => value.and_then(non_blank),
        None => activation.default_redirect_url,
    };
    let android_url = match request.android_url {
        Some(value) => value.and_then(non_blank),
        None => activation.android_url,
    };
    let ios_url = match request.ios_url {
        Some(value) => value.and_then(non_blank),
        None => activation.ios_url,
    };

    db::activations::update_redirects(
        &state.db,
        &activation_id,
        default_redirect_url.as_deref(),
        android_url.as_deref(),
        ios_url.as_deref(),
    )
    .await
    .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true })))
}

/// GET /api/activations/:id/districts — Districts under an activation.
pub async fn list_districts(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(activation_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::Activation, &activation_id, &organization_id).await?;

    let items = db::districts::list_for_activation(&state.db, &activation_id)
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true, "items": items })))
}

/// Request body for creating a district.
#[derive(Debug, Deserialize)]
pub struct CreateDistrictRequest {
    pub name: String,
}

/// POST /api/activations/:id/districts — Create a district under an activation.
/// The district's organization_id is copied from the parent activation here,
/// never taken from the client.
pub async fn create_district(
    ApiAuthenticatedSession(session): ApiAuthenticatedSession,
    State(state): State<AppState>,
    Path(activation_id): Path<String>,
    Json(request): Json<CreateDistrictRequest>,
) -> Result<Json<Value>, AppError> {
    let organization_id = tenant::require_organization(&state.db, &session.user_id).await?;
    tenant::require_in_org(&state.db, ResourceKind::Activation, &activation_id, &organization_id).await?;

    let name = non_blank(request.name)
        .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;
    if name.len() > 255 {
        return Err(AppError::Validation("Name is too long".to_string()));
    }

    let activation = db::activations::find_by_id(&state.db, &activation_id)
        .await
        .map_err(AppError::Database)?
        .ok_or(AppError::Forbidden)?;

    let district = db::districts::NewDistrict {
        id: ulid::Ulid::new().to_string(),
        name,
        activation_id: activation.id,
        organization_id: activation.organization_id,
    };
    db::districts::insert(&state.db, &district)
        .await
        .map_err(AppError::Database)?;

    Ok(Json(json!({ "ok": true, "district": { "id": district.id } })))
}

/// Activation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/activations/list", get(list))
        .route("/api/activations/:id/redirects", patch(update_redirects))
        .route(
            "/api/activations/:id/districts",
            get(list_districts).post(create_district),
        )
}
