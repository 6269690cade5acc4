// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Opaque byte sink returning a stable reference (URL path) for the stored blob.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn store(
        &self,
        folder: &str,
        original_file_name: Option<&str>,
        bytes: Bytes,
    ) -> ApplicationResult<String>;

    /// Deletes a blob previously returned by `store`. Unknown references are not an error.
    async fn remove(&self, reference: &str) -> ApplicationResult<()>;
}
