pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the site route tree (public pages + admin panel).
///
/// Route hierarchy:
///
/// ```text
/// /                               home (recent projects)
/// /projects                       list all
/// /projects/{id}                  detail
/// /contact                        form payload, submission
/// /resume                         newest PDF download
///
/// /admin                          dashboard (gated)
/// /admin/login                    login page, credential check
/// /admin/logout                   session revocation
/// /admin/project/new              create (gated)
/// /admin/project/{id}/edit        update (gated)
/// /admin/project/{id}/delete      delete (gated)
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
}
