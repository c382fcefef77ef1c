//! Media storage
//!
//! Uploaded images are renamed to a random UUID, keeping only the
//! lowercased extension, and stored under `<media_dir>/<folder>/`.

use std::path::{Component, Path, PathBuf};

use crate::utils::{AppError, AppResult};
use shared::error::ErrorCode;

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stored file name for an upload: `<uuid>[.<ext>]`
    pub fn file_name_for(original: &str) -> String {
        let id = uuid::Uuid::new_v4();
        match extension_of(original) {
            Some(ext) => format!("{id}.{ext}"),
            None => id.to_string(),
        }
    }

    /// Write an upload and return its reference relative to the media root
    pub async fn store(&self, folder: &str, original: &str, bytes: &[u8]) -> AppResult<String> {
        let folder = validate_folder(folder)?;
        let name = Self::file_name_for(original);

        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| storage_error(&dir, e))?;
        let path = dir.join(&name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| storage_error(&path, e))?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Media stored");
        Ok(format!("{folder}/{name}"))
    }

    /// Absolute path of a stored reference
    pub fn path_of(&self, reference: &str) -> PathBuf {
        self.root.join(reference)
    }
}

fn extension_of(original: &str) -> Option<String> {
    let trimmed = original.trim();
    let (stem, ext) = trimmed.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn validate_folder(folder: &str) -> AppResult<&str> {
    let folder = folder.trim_matches('/');
    let plain = !folder.is_empty()
        && Path::new(folder)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if !plain {
        return Err(AppError::invalid_request(format!(
            "Invalid media folder '{folder}'"
        )));
    }
    Ok(folder)
}

fn storage_error(path: &Path, err: std::io::Error) -> AppError {
    AppError::with_message(
        ErrorCode::StorageError,
        format!("Failed to write {}: {err}", path.display()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let name = MediaStore::file_name_for(" Photo.JPG ");
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.len(), 36 + 4);

        let bare = MediaStore::file_name_for("README");
        assert_eq!(bare.len(), 36);
        assert!(!bare.contains('.'));

        assert_eq!(extension_of(".hidden"), None);
        assert_eq!(extension_of("a.tar.GZ"), Some("gz".to_string()));
    }

    #[test]
    fn test_folder_rules() {
        assert!(validate_folder("dishes").is_ok());
        assert!(validate_folder("gallery/2026").is_ok());
        assert!(validate_folder("../etc").is_err());
        assert!(validate_folder("").is_err());
    }

    #[tokio::test]
    async fn test_store_writes_under_folder() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let reference = store.store("dishes", "steak.PNG", b"img").await.unwrap();
        assert!(reference.starts_with("dishes/"));
        assert!(reference.ends_with(".png"));
        assert_eq!(std::fs::read(store.path_of(&reference)).unwrap(), b"img");

        let other = store.store("dishes", "steak.PNG", b"img").await.unwrap();
        assert_ne!(reference, other);
    }
}
