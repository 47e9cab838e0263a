use async_trait::async_trait;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    GetGalleriesError, GetGalleriesUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    GalleryRecord, GalleryRepository, GalleryRepositoryError,
};

pub struct GetGalleriesService<R>
where
    R: GalleryRepository,
{
    gallery_repository: R,
}

impl<R> GetGalleriesService<R>
where
    R: GalleryRepository,
{
    pub fn new(gallery_repository: R) -> Self {
        Self { gallery_repository }
    }
}

#[async_trait]
impl<R> GetGalleriesUseCase for GetGalleriesService<R>
where
    R: GalleryRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<GalleryRecord>, GetGalleriesError> {
        self.gallery_repository
            .list_galleries()
            .await
            .map_err(|e| match e {
                GalleryRepositoryError::DatabaseError(msg) => {
                    GetGalleriesError::RepositoryError(msg)
                }
                GalleryRepositoryError::NotFound => GetGalleriesError::RepositoryError(
                    "unexpected not found while listing galleries".to_string(),
                ),
            })
    }
}
