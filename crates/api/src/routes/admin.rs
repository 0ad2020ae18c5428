//! Route definitions for the admin panel.
//!
//! Every route except login and logout is behind the admin gate; the gate
//! is enforced per-handler via the [`crate::middleware::admin::AdminGate`]
//! extractor so the check always runs before any handler side effect.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, admin_projects};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET  /                     -> dashboard (gated)
/// GET  /login                -> login_page
/// POST /login                -> login
/// GET  /logout               -> logout
/// GET  /project/new          -> new_form (gated)
/// POST /project/new          -> create (gated)
/// GET  /project/{id}/edit    -> edit_form (gated)
/// POST /project/{id}/edit    -> update (gated)
/// POST /project/{id}/delete  -> delete (gated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/login", get(admin::login_page).post(admin::login))
        .route("/logout", get(admin::logout))
        .route(
            "/project/new",
            get(admin_projects::new_form).post(admin_projects::create),
        )
        .route(
            "/project/{id}/edit",
            get(admin_projects::edit_form).post(admin_projects::update),
        )
        .route("/project/{id}/delete", post(admin_projects::delete))
}
