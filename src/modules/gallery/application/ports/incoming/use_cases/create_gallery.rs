use async_trait::async_trait;
use std::fmt;

use crate::modules::gallery::application::ports::outgoing::{CreateGalleryData, GalleryRecord};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateGalleryError {
    /// Rejected before touching the repository.
    Validation(String),
    RepositoryError(String),
}

impl fmt::Display for CreateGalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateGalleryError::Validation(msg) => write!(f, "validation failed: {}", msg),
            CreateGalleryError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateGalleryUseCase: Send + Sync {
    async fn execute(&self, data: CreateGalleryData) -> Result<GalleryRecord, CreateGalleryError>;
}
