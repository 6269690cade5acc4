// src/application/commands/upload.rs
use bytes::Bytes;

use crate::application::{error::ApplicationResult, ports::storage::BlobStore};
use crate::domain::content::ImageRef;

/// Raw image part of a create request. Contents are never inspected.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Empty uploads are treated as "no image".
pub(crate) async fn store_image(
    blobs: &dyn BlobStore,
    folder: &str,
    upload: Option<ImageUpload>,
) -> ApplicationResult<Option<ImageRef>> {
    let Some(upload) = upload.filter(|upload| !upload.bytes.is_empty()) else {
        return Ok(None);
    };
    let reference = blobs
        .store(folder, upload.file_name.as_deref(), upload.bytes)
        .await?;
    tracing::debug!(folder, reference = %reference, "stored image");
    Ok(Some(ImageRef::new(reference)?))
}

/// Best-effort cleanup of an image stored for a write that did not go through.
pub(crate) async fn discard_image(blobs: &dyn BlobStore, image: Option<&ImageRef>) {
    let Some(image) = image else {
        return;
    };
    match blobs.remove(image.as_str()).await {
        Ok(()) => tracing::debug!(reference = %image.as_str(), "discarded orphaned image"),
        Err(err) => {
            tracing::warn!(reference = %image.as_str(), error = %err, "failed to discard orphaned image");
        }
    }
}
