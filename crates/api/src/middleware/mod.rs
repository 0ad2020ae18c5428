//! Request extractors.
//!
//! - [`admin`] -- the admin session gate guarding privileged routes.

pub mod admin;
