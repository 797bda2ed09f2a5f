use axum::body::Body;
use tower::ServiceExt;

mod common;

use crate::common::*;

async fn get_redirect(app: &axum::Router, uri: &str) -> (http::StatusCode, String) {
    let request = http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get("location")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    (status, location)
}

#[tokio::test]
async fn single_strategy_redirects_to_single_url() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    let org = create_org(&pool, "Acme", &user).await;
    create_link(&pool, &org, "promo1", "single", Some("https://example.com/ios"), None, true).await;

    let (status, location) = get_redirect(&app, "/l/promo1").await;
    assert_eq!(status, http::StatusCode::FOUND);
    assert_eq!(location, "https://example.com/ios");
}

#[tokio::test]
async fn other_strategy_redirects_to_fallback_url() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    let org = create_org(&pool, "Acme", &user).await;
    create_link(
        &pool,
        &org,
        "promo1",
        "fallback",
        Some("https://example.com/unused"),
        Some("https://example.com/android"),
        true,
    )
    .await;

    let (status, location) = get_redirect(&app, "/l/promo1").await;
    assert_eq!(status, http::StatusCode::FOUND);
    assert_eq!(location, "https://example.com/android");
}

#[tokio::test]
async fn unknown_slug_redirects_to_root() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (status, location) = get_redirect(&app, "/l/missing").await;
    assert_eq!(status, http::StatusCode::FOUND);
    assert_eq!(location, "/");
}

#[tokio::test]
async fn inactive_link_redirects_to_root() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    let org = create_org(&pool, "Acme", &user).await;
    create_link(&pool, &org, "paused", "single", Some("https://example.com/live"), None, false)
        .await;

    let (status, location) = get_redirect(&app, "/l/paused").await;
    assert_eq!(status, http::StatusCode::FOUND);
    assert_eq!(location, "/");
}

#[tokio::test]
async fn active_single_link_without_url_redirects_to_root() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    let org = create_org(&pool, "Acme", &user).await;
    create_link(&pool, &org, "empty", "single", None, Some("https://example.com/unused"), true)
        .await;

    let (status, location) = get_redirect(&app, "/l/empty").await;
    assert_eq!(status, http::StatusCode::FOUND);
    assert_eq!(location, "/");
}

#[tokio::test]
async fn redirects_are_never_permanent() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    let org = create_org(&pool, "Acme", &user).await;
    create_link(&pool, &org, "promo1", "single", Some("https://example.com/a"), None, true).await;

    for uri in ["/l/promo1", "/l/missing", "/r/promo1"] {
        let (status, _) = get_redirect(&app, uri).await;
        assert_eq!(status, http::StatusCode::FOUND, "{} must be a temporary redirect", uri);
    }
}

#[tokio::test]
async fn alias_route_hops_to_resolver() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (status, location) = get_redirect(&app, "/r/promo1").await;
    assert_eq!(status, http::StatusCode::FOUND);
    assert_eq!(location, "/l/promo1");
}

#[tokio::test]
async fn malformed_slug_redirects_to_root() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (status, location) = get_redirect(&app, "/l/bad%20slug").await;
    assert_eq!(status, http::StatusCode::FOUND);
    assert_eq!(location, "/");
}

#[tokio::test]
async fn reconfiguring_a_link_takes_effect_immediately() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    let org = create_org(&pool, "Acme", &user).await;
    create_link(&pool, &org, "promo1", "single", Some("https://example.com/v1"), None, true).await;

    let (_, location) = get_redirect(&app, "/l/promo1").await;
    assert_eq!(location, "https://example.com/v1");

    sqlx::query("UPDATE tracked_links SET single_url = 'https://example.com/v2' WHERE slug = 'promo1'")
        .execute(&pool)
        .await
        .unwrap();

    let (_, location) = get_redirect(&app, "/l/promo1").await;
    assert_eq!(location, "https://example.com/v2");
}
