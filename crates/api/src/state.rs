use std::sync::Arc;

use folio_core::store::UploadStore;

use crate::config::ServerConfig;
use crate::notifications::ContactMailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Storage port for uploaded files.
    pub uploads: Arc<dyn UploadStore>,
    /// Contact-notification mailer; `None` when SMTP is not configured.
    pub mailer: Option<Arc<ContactMailer>>,
}
