//! Admin session model and DTO.

use folio_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An admin session row from the `admin_sessions` table.
///
/// Only the SHA-256 digest of the opaque session token is stored, so a
/// database leak does not compromise active sessions.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new admin session.
#[derive(Debug, Clone)]
pub struct CreateAdminSession {
    pub token_hash: String,
    pub expires_at: Timestamp,
}
