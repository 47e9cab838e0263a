use std::sync::Arc;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    CreateGalleryUseCase, DeleteGalleryUseCase, GetGalleriesUseCase, UpdateGalleryUseCase,
};

#[derive(Clone)]
pub struct GalleryUseCases {
    pub get_list: Arc<dyn GetGalleriesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateGalleryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateGalleryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteGalleryUseCase + Send + Sync>,
}
