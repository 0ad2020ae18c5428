//! Route definitions for the public site pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{contact, pages, resume};
use crate::state::AppState;

/// Routes mounted at the site root.
///
/// ```text
/// GET  /               -> home
/// GET  /projects       -> list_projects
/// GET  /projects/{id}  -> project_detail
/// GET  /contact        -> contact_page
/// POST /contact        -> submit
/// GET  /resume         -> download
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/projects", get(pages::list_projects))
        .route("/projects/{id}", get(pages::project_detail))
        .route("/contact", get(contact::contact_page).post(contact::submit))
        .route("/resume", get(resume::download))
}
