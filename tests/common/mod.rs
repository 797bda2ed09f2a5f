#![allow(dead_code)]

use axum::body::Body;
use fieldlink::app::{
    db,
    domain::{Email, HashedPassword, OrganizationId, Password, Slug, UserId},
};
use fieldlink::create_router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub async fn test_pool() -> SqlitePool {
    // Single connection: every pooled connection to sqlite::memory: would
    // otherwise get its own empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub fn test_router(pool: SqlitePool) -> axum::Router {
    let state = fieldlink::app::AppState {
        db: pool,
        config: fieldlink::app::config::Config::for_tests(),
    };
    create_router(state)
}

pub fn extract_session_id_from_cookie(set_cookie_header: &str) -> Option<&str> {
    set_cookie_header.split(';').next()?.strip_prefix("session_id=")
}

/// Create a user directly in the database. Returns the user id.
pub async fn create_user(pool: &SqlitePool, email: &str, password: &str) -> String {
    let email = Email::new(email.to_string()).unwrap();
    let password = Password::new(password.to_string()).unwrap();
    let password_hash = HashedPassword::from_password(&password).unwrap();
    let user_id = UserId::new();

    db::users::insert(
        pool,
        &db::NewUser {
            id: user_id.clone(),
            email,
            password_hash,
        },
    )
    .await
    .unwrap();

    user_id.as_str()
}

/// Create a user, log in over HTTP, return cookie header for authenticated requests.
pub async fn authenticated_cookie(
    pool: &SqlitePool,
    app: &axum::Router,
    email: &str,
    password: &str,
) -> String {
    create_user(pool, email, password).await;
    login_cookie(app, email, password).await
}

/// Log an existing user in over HTTP, return cookie header.
pub async fn login_cookie(app: &axum::Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let request = http::Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap();
    let session_id = extract_session_id_from_cookie(set_cookie).unwrap();
    format!("session_id={}", session_id)
}

/// Create an organization owned by a user. Returns the organization id.
pub async fn create_org(pool: &SqlitePool, name: &str, owner_user_id: &str) -> String {
    let org_id = OrganizationId::new();
    db::organizations::insert(
        pool,
        &db::organizations::NewOrganization {
            id: org_id.clone(),
            name: name.to_string(),
            owner_user_id: UserId::from_string(owner_user_id).unwrap(),
            plan: "free".to_string(),
        },
    )
    .await
    .unwrap();
    org_id.as_str()
}

/// Create a profile row linking a user to an organization (or to none).
pub async fn link_profile(pool: &SqlitePool, user_id: &str, org_id: Option<&str>) {
    let user_id = UserId::from_string(user_id).unwrap();
    let org_id = org_id.map(|o| OrganizationId::from_string(o).unwrap());
    db::profiles::insert(pool, &user_id, org_id.as_ref()).await.unwrap();
}

/// Create an activation for an organization. Returns the activation id.
pub async fn create_activation(pool: &SqlitePool, org_id: &str, name: &str) -> String {
    let id = ulid::Ulid::new().to_string();
    db::activations::insert(
        pool,
        &db::activations::NewActivation {
            id: id.clone(),
            name: name.to_string(),
            organization_id: OrganizationId::from_string(org_id).unwrap(),
        },
    )
    .await
    .unwrap();
    id
}

/// Create a district under an activation, copying the activation's organization.
pub async fn create_district(pool: &SqlitePool, activation_id: &str, name: &str) -> String {
    let activation = db::activations::find_by_id(pool, activation_id)
        .await
        .unwrap()
        .unwrap();
    let id = ulid::Ulid::new().to_string();
    db::districts::insert(
        pool,
        &db::districts::NewDistrict {
            id: id.clone(),
            name: name.to_string(),
            activation_id: activation.id,
            organization_id: activation.organization_id,
        },
    )
    .await
    .unwrap();
    id
}

/// Create a zone under a district, copying the district's organization and activation.
pub async fn create_zone(pool: &SqlitePool, district_id: &str, name: &str) -> String {
    let district = db::districts::find_by_id(pool, district_id)
        .await
        .unwrap()
        .unwrap();
    let id = ulid::Ulid::new().to_string();
    db::zones::insert(
        pool,
        &db::zones::NewZone {
            id: id.clone(),
            name: name.to_string(),
            district_id: district.id,
            activation_id: district.activation_id,
            organization_id: district.organization_id,
        },
    )
    .await
    .unwrap();
    id
}

/// Create an agent in an organization. Returns the agent id.
pub async fn create_agent(pool: &SqlitePool, org_id: &str, display_name: &str) -> String {
    let id = ulid::Ulid::new().to_string();
    db::agents::insert(
        pool,
        &db::agents::NewAgent {
            id: id.clone(),
            display_name: display_name.to_string(),
            organization_id: org_id.to_string(),
        },
    )
    .await
    .unwrap();
    id
}

/// Create a tracked link. Returns the link id.
pub async fn create_link(
    pool: &SqlitePool,
    org_id: &str,
    slug: &str,
    strategy: &str,
    single_url: Option<&str>,
    fallback_url: Option<&str>,
    is_active: bool,
) -> String {
    let id = ulid::Ulid::new().to_string();
    db::tracked_links::insert(
        pool,
        &db::tracked_links::NewTrackedLink {
            id: id.clone(),
            slug: Slug::new(slug).unwrap(),
            organization_id: org_id.to_string(),
            destination_strategy: strategy.to_string(),
            single_url: single_url.map(str::to_string),
            fallback_url: fallback_url.map(str::to_string),
            is_active,
        },
    )
    .await
    .unwrap();
    id
}

/// Send a JSON request with an optional cookie; return (status, parsed body).
pub async fn json_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> (http::StatusCode, serde_json::Value) {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, value)
}
