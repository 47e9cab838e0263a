use async_trait::async_trait;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    CreateGalleryError, CreateGalleryUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    CreateGalleryData, GalleryRecord, GalleryRepository, GalleryRepositoryError,
};

pub struct CreateGalleryService<R>
where
    R: GalleryRepository,
{
    gallery_repository: R,
}

impl<R> CreateGalleryService<R>
where
    R: GalleryRepository,
{
    pub fn new(gallery_repository: R) -> Self {
        Self { gallery_repository }
    }
}

#[async_trait]
impl<R> CreateGalleryUseCase for CreateGalleryService<R>
where
    R: GalleryRepository + Send + Sync,
{
    async fn execute(&self, data: CreateGalleryData) -> Result<GalleryRecord, CreateGalleryError> {
        if data.name.trim().is_empty() {
            return Err(CreateGalleryError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        if data.image_path.trim().is_empty() {
            return Err(CreateGalleryError::Validation(
                "image path must not be empty".to_string(),
            ));
        }

        self.gallery_repository
            .create_gallery(data)
            .await
            .map_err(|e| match e {
                GalleryRepositoryError::DatabaseError(msg) => {
                    CreateGalleryError::RepositoryError(msg)
                }
                GalleryRepositoryError::NotFound => CreateGalleryError::RepositoryError(
                    "unexpected not found while creating gallery".to_string(),
                ),
            })
    }
}
