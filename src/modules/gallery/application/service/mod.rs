pub mod create_gallery_service;
pub mod delete_gallery_service;
pub mod get_galleries_service;
pub mod update_gallery_service;

pub use create_gallery_service::CreateGalleryService;
pub use delete_gallery_service::DeleteGalleryService;
pub use get_galleries_service::GetGalleriesService;
pub use update_gallery_service::UpdateGalleryService;
