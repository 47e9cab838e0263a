use async_trait::async_trait;
use std::fmt;

use crate::modules::gallery::application::ports::outgoing::GalleryRecord;

#[derive(Debug, Clone)]
pub enum GetGalleriesError {
    RepositoryError(String),
}

impl fmt::Display for GetGalleriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetGalleriesError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetGalleriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<GalleryRecord>, GetGalleriesError>;
}
