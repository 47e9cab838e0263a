use async_trait::async_trait;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    UpdateGalleryError, UpdateGalleryUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    GalleryRecord, GalleryRepository, GalleryRepositoryError, UpdateGalleryData,
};

pub struct UpdateGalleryService<R>
where
    R: GalleryRepository,
{
    gallery_repository: R,
}

impl<R> UpdateGalleryService<R>
where
    R: GalleryRepository,
{
    pub fn new(gallery_repository: R) -> Self {
        Self { gallery_repository }
    }
}

#[async_trait]
impl<R> UpdateGalleryUseCase for UpdateGalleryService<R>
where
    R: GalleryRepository + Send + Sync,
{
    async fn execute(&self, data: UpdateGalleryData) -> Result<GalleryRecord, UpdateGalleryError> {
        if data.name.trim().is_empty() {
            return Err(UpdateGalleryError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        if data.image_path.trim().is_empty() {
            return Err(UpdateGalleryError::Validation(
                "image path must not be empty".to_string(),
            ));
        }

        self.gallery_repository
            .update_gallery(data)
            .await
            .map_err(|e| match e {
                GalleryRepositoryError::NotFound => UpdateGalleryError::NotFound,
                GalleryRepositoryError::DatabaseError(msg) => {
                    UpdateGalleryError::RepositoryError(msg)
                }
            })
    }
}
