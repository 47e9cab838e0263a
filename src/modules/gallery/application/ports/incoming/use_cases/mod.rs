pub mod create_gallery;
pub mod delete_gallery;
pub mod get_galleries;
pub mod update_gallery;

pub use create_gallery::{CreateGalleryError, CreateGalleryUseCase};
pub use delete_gallery::{DeleteGalleryError, DeleteGalleryUseCase};
pub use get_galleries::{GetGalleriesError, GetGalleriesUseCase};
pub use update_gallery::{UpdateGalleryError, UpdateGalleryUseCase};
