use async_trait::async_trait;
use std::fmt;

use crate::modules::gallery::application::ports::outgoing::{GalleryRecord, UpdateGalleryData};

#[derive(Debug, Clone)]
pub enum UpdateGalleryError {
    Validation(String),
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateGalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateGalleryError::Validation(msg) => write!(f, "validation failed: {}", msg),
            UpdateGalleryError::NotFound => write!(f, "gallery not found"),
            UpdateGalleryError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateGalleryUseCase: Send + Sync {
    async fn execute(&self, data: UpdateGalleryData) -> Result<GalleryRecord, UpdateGalleryError>;
}
