//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, short_description, long_description, image_filename, project_url, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, short_description, long_description, project_url, image_filename)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.long_description)
            .bind(&input.project_url)
            .bind(&input.image_filename)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects ordered by most recently created first.
    ///
    /// `limit` caps the result when `Some` (e.g. the home page shows six).
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<Project>, sqlx::Error> {
        match limit {
            Some(limit) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC LIMIT $1"
                );
                sqlx::query_as::<_, Project>(&query)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
                sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a project's fields, returning the updated row.
    ///
    /// Text fields are overwritten from `input`; `image_filename` is only
    /// overwritten when `input.image_filename` is `Some`, so edits without
    /// a new upload keep the existing image. Returns `None` if no row with
    /// the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                short_description = $3,
                long_description = $4,
                project_url = $5,
                image_filename = COALESCE($6, image_filename)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.long_description)
            .bind(&input.project_url)
            .bind(&input.image_filename)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    ///
    /// No cascading side effects: projects have no child entities.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
