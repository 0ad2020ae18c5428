//! The admin session gate.
//!
//! [`AdminGate`] is an extractor that proves the current request carries an
//! authorized admin session. Extraction runs before the handler body, so no
//! admin side effect can execute when the gate denies.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use folio_db::repositories::AdminSessionRepo;

use crate::auth::session::{hash_session_token, SESSION_COOKIE};
use crate::state::AppState;

/// Proof of an authorized admin session.
///
/// Use this as the first extractor parameter in any handler that requires
/// admin rights:
///
/// ```ignore
/// async fn dashboard(_gate: AdminGate, State(state): State<AppState>) -> AppResult<Json<()>> {
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminGate;

/// Rejection for [`AdminGate`]: a redirect to the login entry point.
///
/// No detail about the denial is leaked to the client.
pub struct GateDenied;

impl IntoResponse for GateDenied {
    fn into_response(self) -> Response {
        Redirect::to("/admin/login").into_response()
    }
}

/// Whether the request's cookie jar carries an active admin session.
///
/// Database failures during lookup are logged and treated as denial.
pub async fn has_active_session(state: &AppState, jar: &CookieJar) -> bool {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return false;
    };
    let hash = hash_session_token(cookie.value());

    match AdminSessionRepo::find_active_by_token_hash(&state.pool, &hash).await {
        Ok(session) => session.is_some(),
        Err(e) => {
            tracing::error!(error = %e, "Admin session lookup failed");
            false
        }
    }
}

impl FromRequestParts<AppState> for AdminGate {
    type Rejection = GateDenied;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if has_active_session(state, &jar).await {
            Ok(AdminGate)
        } else {
            Err(GateDenied)
        }
    }
}
