//! Public short-link resolution. No auth: anyone scanning a printed QR/NFC
//! tag lands here, and the response must always be *some* redirect.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::app::{
    db,
    domain::{DestinationStrategy, Slug},
    AppState,
};

/// Where unknown, inactive, or misconfigured slugs land.
pub const DEFAULT_DESTINATION: &str = "/";

/// 302 Found. Never a permanent status: slug→destination mappings are
/// mutable and reused, and a cached 301 would keep sending printed tags
/// to a stale URL after an organization reconfigures its campaign.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Compute the destination for an active link.
/// Strategy `single` reads `single_url`; anything else reads `fallback_url`.
/// A NULL or blank URL falls through to the default destination.
fn destination_for(link: &db::tracked_links::TrackedLink) -> String {
    let strategy = link
        .destination_strategy
        .parse::<DestinationStrategy>()
        .unwrap_or(DestinationStrategy::Fallback);

    let url = match strategy {
        DestinationStrategy::Single => link.single_url.as_deref(),
        DestinationStrategy::Fallback => link.fallback_url.as_deref(),
    };

    match url {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_DESTINATION.to_string(),
    }
}

/// GET /l/:slug — resolve a tracked link and redirect the visitor.
/// Unknown slug, inactive link, lookup failure: all 302 to the default
/// destination, never an error page.
pub async fn resolve(State(state): State<AppState>, Path(raw_slug): Path<String>) -> Response {
    let slug = match Slug::new(&raw_slug) {
        Ok(slug) => slug,
        // Can't match any stored link; same outcome as an unknown slug.
        Err(_) => return found(DEFAULT_DESTINATION),
    };

    match db::tracked_links::find_active_by_slug(&state.db, &slug).await {
        Ok(Some(link)) => found(&destination_for(&link)),
        Ok(None) => found(DEFAULT_DESTINATION),
        Err(err) => {
            tracing::error!(%err, slug = %slug, "tracked link lookup failed");
            found(DEFAULT_DESTINATION)
        }
    }
}

/// GET /r/:slug — short alias printed on early tags; hops to /l/:slug.
pub async fn resolve_alias(Path(raw_slug): Path<String>) -> Response {
    match Slug::new(&raw_slug) {
        Ok(slug) => found(&format!("/l/{}", slug)),
        Err(_) => found(DEFAULT_DESTINATION),
    }
}

/// Public redirect routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/l/:slug", get(resolve))
        .route("/r/:slug", get(resolve_alias))
}
