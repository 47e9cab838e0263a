use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageRecord {
    pub id: i32,
    pub path: String,
}

/// A gallery entry as persisted: always carries exactly one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GalleryRecord {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: ImageRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGalleryData {
    pub name: String,
    pub description: Option<String>,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGalleryData {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_path: String,
}

//
// ──────────────────────────────────────────────────────────
// Repository port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum GalleryRepositoryError {
    NotFound,
    DatabaseError(String),
}

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Full list, ordered by id. The image row rides along with each entry.
    async fn list_galleries(&self) -> Result<Vec<GalleryRecord>, GalleryRepositoryError>;

    /// Inserts the image row and the gallery row in one transaction; a
    /// gallery is never persisted without its image.
    async fn create_gallery(
        &self,
        data: CreateGalleryData,
    ) -> Result<GalleryRecord, GalleryRepositoryError>;

    async fn update_gallery(
        &self,
        data: UpdateGalleryData,
    ) -> Result<GalleryRecord, GalleryRepositoryError>;

    /// Removes the gallery and the image row it owns.
    async fn delete_gallery(&self, id: i32) -> Result<(), GalleryRepositoryError>;
}
