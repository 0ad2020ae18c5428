//! Handlers for admin project CRUD.
//!
//! Create and edit accept a multipart form with text fields plus an
//! optional `image` file part. A rejected image (missing or disallowed
//! extension) degrades to "no image" and never fails the submission.

use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::upload::ALLOWED_IMAGE_EXTENSIONS;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::ProjectRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::AdminGate;
use crate::response::DataResponse;
use crate::state::AppState;

/// Subdirectory of the upload root holding project images.
const PROJECT_IMAGE_DIR: &str = "projects";

// ---------------------------------------------------------------------------
// Form input
// ---------------------------------------------------------------------------

/// Typed input collected from a project create/edit multipart submission.
#[derive(Debug, Default, Validate)]
pub struct ProjectInput {
    #[validate(length(min = 1, max = 140, message = "Title is required (max 140 characters)"))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Short description is required (max 255 characters)"
    ))]
    pub short_description: String,
    pub long_description: Option<String>,
    #[validate(
        url(message = "Enter a valid URL"),
        length(max = 255, message = "Project URL must be at most 255 characters")
    )]
    pub project_url: Option<String>,
    /// Client filename and raw bytes of the optional image part.
    pub image: Option<(String, Vec<u8>)>,
}

/// Collect and validate the project form from a multipart body.
///
/// Unknown fields are ignored; empty optional text fields become `None`;
/// an image part with an empty filename counts as "no file selected".
async fn read_project_input(multipart: &mut Multipart) -> AppResult<ProjectInput> {
    let mut input = ProjectInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => input.title = read_text(field).await?,
            "short_description" => input.short_description = read_text(field).await?,
            "long_description" => input.long_description = non_empty(read_text(field).await?),
            "project_url" => input.project_url = non_empty(read_text(field).await?),
            "image" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !filename.is_empty() {
                    input.image = Some((filename, data.to_vec()));
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    input.validate()?;
    Ok(input)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

/// Offer the form's image to the upload store.
///
/// Returns the stored reference path, or `None` when no file was supplied
/// or the upload was rejected (disallowed extension).
async fn store_image(state: &AppState, input: &ProjectInput) -> AppResult<Option<String>> {
    let candidate = input
        .image
        .as_ref()
        .map(|(name, bytes)| (name.as_str(), bytes.as_slice()));

    let outcome = state.uploads.save(PROJECT_IMAGE_DIR, candidate).await?;
    Ok(outcome.path().map(str::to_string))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Form metadata for the project create page.
#[derive(Debug, Serialize)]
pub struct ProjectFormMeta {
    pub allowed_image_extensions: &'static [&'static str],
    pub max_upload_bytes: usize,
}

/// GET /admin/project/new
///
/// Form metadata for the create page.
pub async fn new_form(_gate: AdminGate, State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: ProjectFormMeta {
            allowed_image_extensions: ALLOWED_IMAGE_EXTENSIONS,
            max_upload_bytes: state.config.max_upload_bytes,
        },
    })
}

/// POST /admin/project/new
///
/// Create a project from the multipart form, storing the optional image.
pub async fn create(
    _gate: AdminGate,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let input = read_project_input(&mut multipart).await?;
    let image_filename = store_image(&state, &input).await?;

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            title: input.title,
            short_description: input.short_description,
            long_description: input.long_description,
            project_url: input.project_url,
            image_filename,
        },
    )
    .await?;

    tracing::info!(project_id = project.id, title = %project.title, "Project created");

    Ok(Redirect::to("/admin"))
}

/// GET /admin/project/{id}/edit
///
/// The project payload for the edit page. 404 if absent.
pub async fn edit_form(
    _gate: AdminGate,
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

/// POST /admin/project/{id}/edit
///
/// Update a project from the multipart form. The stored image is only
/// overwritten when a new valid upload was provided.
pub async fn update(
    _gate: AdminGate,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let input = read_project_input(&mut multipart).await?;
    let image_filename = store_image(&state, &input).await?;

    ProjectRepo::update(
        &state.pool,
        id,
        &UpdateProject {
            title: input.title,
            short_description: input.short_description,
            long_description: input.long_description,
            project_url: input.project_url,
            image_filename,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    }))?;

    tracing::info!(project_id = id, "Project updated");

    Ok(Redirect::to("/admin"))
}

/// POST /admin/project/{id}/delete
///
/// Hard-delete a project. 404 if absent.
pub async fn delete(
    _gate: AdminGate,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, "Project deleted");

    Ok(Redirect::to("/admin"))
}
