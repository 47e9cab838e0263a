use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ImageStoreError {
    #[error("storage rejected the object: {0}")]
    Rejected(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Object-storage seam. Takes raw image bytes and hands back a publicly
/// resolvable path usable as an `image.path` value.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn put(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, ImageStoreError>;
}
