// src/infrastructure/storage.rs
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use uuid::Uuid;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::BlobStore,
};

const MAX_EXTENSION_LEN: usize = 8;

/// Stores uploads under `<root>/images/<folder>/` with a random file name.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Directory served under `/images`.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join("images")
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn store(
        &self,
        folder: &str,
        original_file_name: Option<&str>,
        bytes: Bytes,
    ) -> ApplicationResult<String> {
        if !is_valid_folder(folder) {
            return Err(ApplicationError::infrastructure(format!(
                "invalid storage folder: {folder}"
            )));
        }

        let file_name = match original_file_name.and_then(sanitized_extension) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        let dir = self.images_dir().join(folder);
        fs::create_dir_all(&dir)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        fs::write(dir.join(&file_name), &bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        tracing::debug!(folder, file = %file_name, size = bytes.len(), "stored upload");
        Ok(format!("/images/{folder}/{file_name}"))
    }

    async fn remove(&self, reference: &str) -> ApplicationResult<()> {
        let Some((folder, file_name)) = reference
            .strip_prefix("/images/")
            .and_then(|rest| rest.split_once('/'))
        else {
            return Err(ApplicationError::infrastructure(format!(
                "not a stored image reference: {reference}"
            )));
        };
        if !is_valid_folder(folder) || !is_valid_file_name(file_name) {
            return Err(ApplicationError::infrastructure(format!(
                "not a stored image reference: {reference}"
            )));
        }

        match fs::remove_file(self.images_dir().join(folder).join(file_name)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
        }
    }
}

fn is_valid_folder(folder: &str) -> bool {
    !folder.is_empty()
        && folder
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Names produced by `store`: a uuid with an optional alphanumeric extension.
fn is_valid_file_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && !file_name.starts_with('.')
        && file_name.matches('.').count() <= 1
        && file_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

/// Lowercased alphanumeric extension of the client-supplied name, if any.
fn sanitized_extension(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > MAX_EXTENSION_LEN || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_sanitized() {
        assert_eq!(sanitized_extension("photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(sanitized_extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(sanitized_extension("noext"), None);
        assert_eq!(sanitized_extension("evil.p?p"), None);
        assert_eq!(sanitized_extension("x.verylongext"), None);
    }

    #[tokio::test]
    async fn writes_under_images_folder() {
        let root = std::env::temp_dir().join(format!("municipal-blobs-{}", Uuid::new_v4()));
        let store = LocalBlobStore::new(&root);

        let reference = store
            .store("news", Some("../../etc/passwd.png"), Bytes::from_static(b"png"))
            .await
            .unwrap();
        assert!(reference.starts_with("/images/news/"));
        assert!(reference.ends_with(".png"));

        let file = reference.trim_start_matches("/images/");
        let written = fs::read(store.images_dir().join(file)).await.unwrap();
        assert_eq!(written, b"png");

        fs::remove_dir_all(&root).await.ok();
    }

    #[tokio::test]
    async fn removes_stored_files() {
        let root = std::env::temp_dir().join(format!("municipal-blobs-{}", Uuid::new_v4()));
        let store = LocalBlobStore::new(&root);

        let reference = store
            .store("services", Some("clinic.png"), Bytes::from_static(b"png"))
            .await
            .unwrap();
        let path = store
            .images_dir()
            .join(reference.trim_start_matches("/images/"));
        assert!(fs::try_exists(&path).await.unwrap());

        store.remove(&reference).await.unwrap();
        assert!(!fs::try_exists(&path).await.unwrap());
        // Already gone is fine.
        store.remove(&reference).await.unwrap();

        fs::remove_dir_all(&root).await.ok();
    }

    #[tokio::test]
    async fn remove_rejects_foreign_references() {
        let store = LocalBlobStore::new(std::env::temp_dir());
        for reference in ["/etc/passwd", "/images/news/../../secret", "/images/../x.png"] {
            let err = store.remove(reference).await.unwrap_err();
            assert!(matches!(err, ApplicationError::Infrastructure(_)), "{reference}");
        }
    }

    #[tokio::test]
    async fn rejects_path_like_folders() {
        let store = LocalBlobStore::new(std::env::temp_dir());
        let err = store
            .store("../news", None, Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Infrastructure(_)));
    }
}
