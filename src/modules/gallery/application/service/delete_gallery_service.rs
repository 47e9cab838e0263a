use async_trait::async_trait;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    DeleteGalleryError, DeleteGalleryUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    GalleryRepository, GalleryRepositoryError,
};

pub struct DeleteGalleryService<R>
where
    R: GalleryRepository,
{
    gallery_repository: R,
}

impl<R> DeleteGalleryService<R>
where
    R: GalleryRepository,
{
    pub fn new(gallery_repository: R) -> Self {
        Self { gallery_repository }
    }
}

#[async_trait]
impl<R> DeleteGalleryUseCase for DeleteGalleryService<R>
where
    R: GalleryRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteGalleryError> {
        self.gallery_repository
            .delete_gallery(id)
            .await
            .map_err(|e| match e {
                GalleryRepositoryError::NotFound => DeleteGalleryError::NotFound,
                GalleryRepositoryError::DatabaseError(msg) => {
                    DeleteGalleryError::RepositoryError(msg)
                }
            })
    }
}
