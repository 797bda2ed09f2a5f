use axum::body::Body;
use fieldlink::app::db;
use tower::ServiceExt;

mod common;

use crate::common::*;

#[tokio::test]
async fn update_link_description_and_redirect_url() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    let org = create_org(&pool, "Acme", &user).await;
    let link = create_link(&pool, &org, "promo1", "single", Some("https://example.com/a"), None, true).await;
    let cookie = login_cookie(&app, "owner@example.com", "Password123").await;

    let (status, body) = json_request(
        &app,
        "PATCH",
        &format!("/api/links/{}", link),
        Some(&cookie),
        Some(serde_json::json!({
            "description": "  Station poster  ",
            "redirect_url": "https://example.com/b"
        })),
    )
    .await;

    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["ok"], true);

    let row = db::tracked_links::find_by_id(&pool, &link).await.unwrap().unwrap();
    assert_eq!(row.description.as_deref(), Some("Station poster"));
    assert_eq!(row.redirect_url.as_deref(), Some("https://example.com/b"));

    // Omitting a field leaves it unchanged; null clears it.
    let (status, _) = json_request(
        &app,
        "PATCH",
        &format!("/api/links/{}", link),
        Some(&cookie),
        Some(serde_json::json!({ "redirect_url": null })),
    )
    .await;
    assert_eq!(status, http::StatusCode::OK);

    let row = db::tracked_links::find_by_id(&pool, &link).await.unwrap().unwrap();
    assert_eq!(row.description.as_deref(), Some("Station poster"));
    assert_eq!(row.redirect_url, None);
}

#[tokio::test]
async fn cross_tenant_link_update_is_forbidden() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user_a = create_user(&pool, "a@example.com", "Password123").await;
    let user_b = create_user(&pool, "b@example.com", "Password123").await;
    let org_a = create_org(&pool, "Org A", &user_a).await;
    create_org(&pool, "Org B", &user_b).await;
    let link = create_link(&pool, &org_a, "promo1", "single", Some("https://a.example"), None, true).await;

    let cookie = login_cookie(&app, "b@example.com", "Password123").await;
    let (status, body) = json_request(
        &app,
        "PATCH",
        &format!("/api/links/{}", link),
        Some(&cookie),
        Some(serde_json::json!({ "description": "hijack" })),
    )
    .await;

    assert_eq!(status, http::StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden");
}

#[tokio::test]
async fn deleting_a_link_stops_public_resolution() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    let org = create_org(&pool, "Acme", &user).await;
    let link = create_link(&pool, &org, "promo1", "single", Some("https://example.com/live"), None, true).await;
    let cookie = login_cookie(&app, "owner@example.com", "Password123").await;

    let (status, body) = json_request(
        &app,
        "DELETE",
        &format!("/api/links/{}", link),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["ok"], true);

    let request = http::Request::builder()
        .method("GET")
        .uri("/l/promo1")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), http::StatusCode::FOUND);
    assert_eq!(response.headers().get("location").unwrap(), "/");
}

#[tokio::test]
async fn rename_organization() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    let org = create_org(&pool, "Acme", &user).await;
    let cookie = login_cookie(&app, "owner@example.com", "Password123").await;

    let (status, body) = json_request(
        &app,
        "PATCH",
        "/api/organization/update",
        Some(&cookie),
        Some(serde_json::json!({ "name": "  Acme Activations  " })),
    )
    .await;

    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["name"], "Acme Activations");

    let row = db::organizations::find_by_id(&pool, &org).await.unwrap().unwrap();
    assert_eq!(row.name, "Acme Activations");
}

#[tokio::test]
async fn rename_organization_requires_a_name() {
    let pool = test_pool().await;
    let app = test_router(pool.clone());
    let user = create_user(&pool, "owner@example.com", "Password123").await;
    create_org(&pool, "Acme", &user).await;
    let cookie = login_cookie(&app, "owner@example.com", "Password123").await;

    let (status, body) = json_request(
        &app,
        "PATCH",
        "/api/organization/update",
        Some(&cookie),
        Some(serde_json::json!({ "name": "" })),
    )
    .await;

    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");
}
