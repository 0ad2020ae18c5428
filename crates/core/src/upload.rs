//! Upload filename sanitation.
//!
//! Client-supplied filenames are only ever consulted for their extension.
//! The stored name is a random 128-bit identifier plus the lowercased
//! extension, so nothing user-controlled survives into the path and
//! collisions with existing files are statistically negligible.

use uuid::Uuid;

/// File extensions accepted for image uploads.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Extract and validate the extension of a client-supplied filename.
///
/// The extension is the substring after the last `.`, compared lowercased
/// against [`ALLOWED_IMAGE_EXTENSIONS`]. Returns `None` when the name has
/// no `.` at all or the extension is not in the allow-set.
///
/// # Examples
///
/// ```
/// use folio_core::upload::sanitize_extension;
///
/// assert_eq!(sanitize_extension("photo.PNG"), Some("png".to_string()));
/// assert_eq!(sanitize_extension("photo.exe"), None);
/// assert_eq!(sanitize_extension("photo"), None);
/// ```
pub fn sanitize_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

/// Generate a collision-free stored filename for a validated extension.
///
/// `ext` must already be lowercased (see [`sanitize_extension`]).
pub fn generate_stored_name(ext: &str) -> String {
    format!("{}.{ext}", Uuid::new_v4().simple())
}

/// Assemble a stored reference path from path segments.
///
/// Segments may carry either `/` or `\` separators (e.g. a configured
/// upload root on Windows); the result is normalized to a single
/// forward-slash form for portable storage in the database.
pub fn reference_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| s.replace('\\', "/"))
        .map(|s| s.trim_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
