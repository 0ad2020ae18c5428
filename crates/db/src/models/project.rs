//! Project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A portfolio entry row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub short_description: String,
    pub long_description: Option<String>,
    /// Stored reference path produced by the upload store, never a
    /// user-supplied path.
    pub image_filename: Option<String>,
    pub project_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub short_description: String,
    pub long_description: Option<String>,
    pub project_url: Option<String>,
    pub image_filename: Option<String>,
}

/// DTO for updating an existing project.
///
/// Text fields overwrite the row unconditionally; `image_filename` is only
/// applied when `Some`, so an edit without a new upload preserves the
/// existing image.
#[derive(Debug, Clone)]
pub struct UpdateProject {
    pub title: String,
    pub short_description: String,
    pub long_description: Option<String>,
    pub project_url: Option<String>,
    pub image_filename: Option<String>,
}
