//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts (and an update DTO where rows are mutable)

pub mod admin_session;
pub mod contact_message;
pub mod project;
