//! Request handlers.
//!
//! Each submodule provides async handler functions for one slice of the
//! HTTP surface. Handlers delegate to the repositories in `folio_db` and
//! map errors via [`crate::error::AppError`].

pub mod admin;
pub mod admin_projects;
pub mod contact;
pub mod pages;
pub mod resume;
