use axum::Router;
use sqlx::SqlitePool;

/// Human-readable application name.
pub const APP_NAME: &str = "Fieldlink";

/// Shared state available to all handlers via Axum's state extractor.
/// The pool travels here explicitly; there is no ambient/global client.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: config::Config,
}

/// App routes. Merged with the public redirect routes in lib.rs.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(features::auth::routes())
        .merge(features::activations::routes())
        .merge(features::districts::routes())
        .merge(features::zones::routes())
        .merge(features::agents::routes())
        .merge(features::links::routes())
        .merge(features::organization::routes())
}

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod features;
pub mod session;
pub mod tenant;
