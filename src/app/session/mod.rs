use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::app::{db, error::AppError, AppState};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session_id";

/// The authenticated caller, as loaded from a valid session row.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub session_id: String,
    pub user_id: String,
}

/// Extractor for API handlers. Rejects with 401 `{"ok":false,"error":"Unauthorized"}`
/// when the cookie is absent, unknown, or expired. An absent session is a
/// normal outcome of every request, not an exceptional one.
pub struct ApiAuthenticatedSession(pub SessionData);

#[async_trait]
impl FromRequestParts<AppState> for ApiAuthenticatedSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthenticated)?;

        let cookie = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthenticated)?;

        let session = db::sessions::find_valid(&state.db, cookie.value())
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::Unauthenticated)?;

        Ok(Self(SessionData {
            session_id: session.id,
            user_id: session.user_id,
        }))
    }
}

pub fn session_cookie(session_id: impl Into<String>) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.into()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .removal()
        .into()
}
