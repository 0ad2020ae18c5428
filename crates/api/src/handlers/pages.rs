//! Handlers for the public project pages.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of recent projects shown on the home page.
const HOME_PROJECT_COUNT: i64 = 6;

/// GET /
///
/// Home page payload: the six most recent projects.
pub async fn home(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool, Some(HOME_PROJECT_COUNT)).await?;

    Ok(Json(DataResponse { data: projects }))
}

/// GET /projects
///
/// All projects, newest first.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool, None).await?;

    Ok(Json(DataResponse { data: projects }))
}

/// GET /projects/{id}
///
/// Project detail, 404 if absent.
pub async fn project_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(DataResponse { data: project }))
}
