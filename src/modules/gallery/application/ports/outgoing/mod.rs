pub mod gallery_repository;

pub use gallery_repository::{
    CreateGalleryData, GalleryRecord, GalleryRepository, GalleryRepositoryError, ImageRecord,
    UpdateGalleryData,
};
