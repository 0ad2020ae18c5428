//! Upload storage port and local-filesystem implementation.
//!
//! Handlers talk to the [`UploadStore`] trait instead of the filesystem
//! directly, so upload behaviour can be exercised against a temp directory
//! in tests and swapped for another backend without touching handler code.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::upload::{generate_stored_name, reference_path, sanitize_extension};

/// Error type for upload storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Directory provisioning or file write failed.
    #[error("Upload storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of offering a candidate upload to the store.
///
/// `Rejected` and `Empty` are ordinary outcomes, not errors: a rejected or
/// absent upload never fails the surrounding form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The file was written; holds the stored reference path.
    Stored(String),
    /// The extension was missing or not in the allow-set. Nothing written.
    Rejected,
    /// No file was supplied. The filesystem was not touched.
    Empty,
}

impl StoreOutcome {
    /// The stored reference path, if a file was written.
    pub fn path(&self) -> Option<&str> {
        match self {
            StoreOutcome::Stored(p) => Some(p),
            StoreOutcome::Rejected | StoreOutcome::Empty => None,
        }
    }
}

/// Storage port for uploaded files.
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Validate and persist a candidate upload into `subdir` under the
    /// store's root.
    ///
    /// `candidate` is the client-supplied filename plus the raw bytes, or
    /// `None` when the form carried no file field. An empty client
    /// filename also counts as "no file" (browsers submit an empty file
    /// part when nothing was selected).
    async fn save(
        &self,
        subdir: &str,
        candidate: Option<(&str, &[u8])>,
    ) -> Result<StoreOutcome, StoreError>;
}

/// [`UploadStore`] backed by a directory on the local filesystem.
///
/// Reference paths are assembled from the configured root string, so when
/// the root is relative to the process working directory (the default),
/// stored references are too.
pub struct LocalUploadStore {
    root: PathBuf,
    /// Forward-slash form of the configured root, used for reference paths.
    root_ref: String,
}

impl LocalUploadStore {
    pub fn new(root: &str) -> Self {
        Self {
            root: PathBuf::from(root),
            root_ref: root.to_string(),
        }
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn save(
        &self,
        subdir: &str,
        candidate: Option<(&str, &[u8])>,
    ) -> Result<StoreOutcome, StoreError> {
        let Some((client_name, bytes)) = candidate else {
            return Ok(StoreOutcome::Empty);
        };
        if client_name.is_empty() {
            return Ok(StoreOutcome::Empty);
        }

        let Some(ext) = sanitize_extension(client_name) else {
            tracing::warn!(filename = client_name, "Rejected upload: disallowed extension");
            return Ok(StoreOutcome::Rejected);
        };

        let dir = self.root.join(subdir);
        // Idempotent: succeeds whether or not the directory already exists.
        tokio::fs::create_dir_all(&dir).await?;

        let stored_name = generate_stored_name(&ext);
        tokio::fs::write(dir.join(&stored_name), bytes).await?;

        let reference = reference_path(&[&self.root_ref, subdir, &stored_name]);
        tracing::debug!(path = %reference, "Stored uploaded file");
        Ok(StoreOutcome::Stored(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> LocalUploadStore {
        LocalUploadStore::new(dir.path().to_str().unwrap())
    }

    #[tokio::test]
    async fn stores_allowed_upload_and_preserves_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        let outcome = store
            .save("projects", Some(("photo.PNG", b"fake png bytes")))
            .await
            .unwrap();

        let path = outcome.path().expect("upload should be stored");
        assert!(path.ends_with(".png"), "extension must be lowercased: {path}");
        assert!(!path.contains("photo"), "client name must be discarded: {path}");
        assert!(!path.contains('\\'));

        // The file really exists under <root>/projects/.
        let stored_name = path.rsplit('/').next().unwrap();
        let on_disk = tmp.path().join("projects").join(stored_name);
        assert_eq!(std::fs::read(on_disk).unwrap(), b"fake png bytes");
    }

    #[tokio::test]
    async fn repeated_saves_never_collide() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        let a = store.save("projects", Some(("a.jpg", b"one"))).await.unwrap();
        let b = store.save("projects", Some(("a.jpg", b"two"))).await.unwrap();

        assert_ne!(a.path().unwrap(), b.path().unwrap());
        assert_eq!(std::fs::read_dir(tmp.path().join("projects")).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn rejects_disallowed_extension_without_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        let outcome = store
            .save("projects", Some(("photo.EXE", b"mz")))
            .await
            .unwrap();

        assert_eq!(outcome, StoreOutcome::Rejected);
        assert!(
            !tmp.path().join("projects").exists(),
            "rejection must not touch the filesystem"
        );
    }

    #[tokio::test]
    async fn rejects_missing_extension_without_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        let outcome = store.save("projects", Some(("photo", b"??"))).await.unwrap();

        assert_eq!(outcome, StoreOutcome::Rejected);
        assert!(!tmp.path().join("projects").exists());
    }

    #[tokio::test]
    async fn no_candidate_is_a_distinct_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        assert_eq!(store.save("projects", None).await.unwrap(), StoreOutcome::Empty);
        assert_eq!(
            store.save("projects", Some(("", b""))).await.unwrap(),
            StoreOutcome::Empty
        );
        assert!(!tmp.path().join("projects").exists());
    }

    #[tokio::test]
    async fn provisions_nested_target_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("static").join("uploads");
        let store = LocalUploadStore::new(root.to_str().unwrap());

        let outcome = store
            .save("projects", Some(("p.webp", b"riff")))
            .await
            .unwrap();

        assert!(matches!(outcome, StoreOutcome::Stored(_)));
        // Saving again into the now-existing directory still succeeds.
        let again = store.save("projects", Some(("q.gif", b"gif"))).await.unwrap();
        assert!(matches!(again, StoreOutcome::Stored(_)));
    }
}
