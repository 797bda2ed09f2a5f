pub mod app;

use axum::{routing::get, Router};

/// Build the full application router. Used by main and by integration tests.
pub fn create_router(state: app::AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(app::features::redirect::routes())
        .merge(app::routes())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / — landing for resolved-to-default redirects and liveness probes.
async fn root() -> &'static str {
    app::APP_NAME
}
