use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone)]
pub enum DeleteGalleryError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteGalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteGalleryError::NotFound => write!(f, "gallery not found"),
            DeleteGalleryError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteGalleryUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteGalleryError>;
}
