pub mod create_gallery;
pub mod delete_gallery;
pub mod get_galleries;
pub mod update_gallery;

pub use create_gallery::{create_gallery_handler, CreateGalleryRequest};
pub use delete_gallery::delete_gallery_handler;
pub use get_galleries::get_galleries_handler;
pub use update_gallery::{update_gallery_handler, UpdateGalleryRequest};
