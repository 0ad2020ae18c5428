//! Handlers for admin login, logout, and the dashboard.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use folio_core::error::CoreError;
use folio_db::models::admin_session::CreateAdminSession;
use folio_db::models::contact_message::ContactMessage;
use folio_db::models::project::Project;
use folio_db::repositories::{AdminSessionRepo, ContactMessageRepo, ProjectRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::session::{generate_session_token, hash_session_token, SESSION_COOKIE};
use crate::error::{AppError, AppResult};
use crate::middleware::admin::{has_active_session, AdminGate};
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of recent contact messages shown on the dashboard.
const RECENT_MESSAGE_COUNT: i64 = 20;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Typed input for `POST /admin/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login page payload.
#[derive(Debug, Serialize)]
pub struct LoginPage {
    /// Whether the request already carries an active admin session.
    pub authenticated: bool,
}

/// Dashboard payload.
#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub projects: Vec<Project>,
    pub messages: Vec<ContactMessage>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/login
///
/// Login page payload. Public; reports whether the caller is already in.
pub async fn login_page(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let authenticated = has_active_session(&state, &jar).await;

    Json(DataResponse {
        data: LoginPage { authenticated },
    })
}

/// POST /admin/login
///
/// Compare the submitted credentials against the configured secrets; on a
/// match, establish a server-side session and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> AppResult<(CookieJar, Redirect)> {
    input.validate()?;

    if !state.config.admin.matches(&input.username, &input.password) {
        tracing::warn!(username = %input.username, "Failed admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session_expiry_hours);

    AdminSessionRepo::create(&state.pool, &CreateAdminSession { token_hash, expires_at }).await?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    tracing::info!("Admin session established");

    Ok((jar.add(cookie), Redirect::to("/admin")))
}

/// GET /admin/logout
///
/// Revoke the current session (if any), clear the cookie, redirect home.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let hash = hash_session_token(cookie.value());
        AdminSessionRepo::revoke_by_token_hash(&state.pool, &hash).await?;
        tracing::info!("Admin session revoked");
    }

    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");

    Ok((jar.remove(removal), Redirect::to("/")))
}

/// GET /admin
///
/// Dashboard payload: all projects plus the most recent contact messages.
pub async fn dashboard(
    _gate: AdminGate,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool, None).await?;
    let messages = ContactMessageRepo::list_recent(&state.pool, RECENT_MESSAGE_COUNT).await?;

    Ok(Json(DataResponse {
        data: DashboardPage { projects, messages },
    }))
}
