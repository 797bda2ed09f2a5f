use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};
use time::{Duration, OffsetDateTime};
use validator::Validate;

use crate::app::{
    db,
    domain::{Email, HashedPassword, Password, UserId},
    error::AppError,
    session,
    AppState,
};

/// Session lifetime for logged-in dashboard users.
const SESSION_DAYS: i64 = 30;

/// Request body for login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// POST /api/auth/login — Verify credentials and set the session cookie.
/// Wrong email and wrong password produce the same message.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Email and password are required".to_string()))?;

    let email = Email::new(request.email)
        .map_err(|_| AppError::Validation("Invalid email or password".to_string()))?;

    // No strength check at login; we only verify against the stored hash.
    let password = Password::for_verification(request.password);

    let user = db::find_by_email(&state.db, &email)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::Validation("Invalid email or password".to_string()))?;

    let hash = HashedPassword::from_string(user.password_hash);
    hash.verify(&password)
        .map_err(|_| AppError::Validation("Invalid email or password".to_string()))?;

    let user_id = UserId::from_string(&user.id)
        .map_err(|_| AppError::Validation("Invalid email or password".to_string()))?;

    let expires_at = OffsetDateTime::now_utc() + Duration::days(SESSION_DAYS);
    let session_id = db::sessions::create(&state.db, &user_id, expires_at)
        .await
        .map_err(AppError::Database)?;

    let jar = jar.add(session::session_cookie(session_id));
    Ok((jar, Json(json!({ "ok": true }))))
}

/// POST /api/auth/logout — Delete the session (if any) and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<Value>), AppError> {
    if let Some(cookie) = jar.get(session::SESSION_COOKIE) {
        db::sessions::delete(&state.db, cookie.value())
            .await
            .map_err(AppError::Database)?;
    }

    let jar = jar.add(session::clear_session_cookie());
    Ok((jar, Json(json!({ "ok": true }))))
}

/// Auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
}
