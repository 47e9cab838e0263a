use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartnerRecord {
    pub id: i32,
    pub name: String,
    pub url: Option<String>,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePartnerData {
    pub name: String,
    pub url: Option<String>,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePartnerData {
    pub id: i32,
    pub name: String,
    pub url: Option<String>,
    pub image_path: String,
}

#[derive(Debug, Clone)]
pub enum PartnerRepositoryError {
    NotFound,
    DatabaseError(String),
}

#[async_trait]
pub trait PartnerRepository: Send + Sync {
    async fn list_partners(&self) -> Result<Vec<PartnerRecord>, PartnerRepositoryError>;

    async fn create_partner(
        &self,
        data: CreatePartnerData,
    ) -> Result<PartnerRecord, PartnerRepositoryError>;

    async fn update_partner(
        &self,
        data: UpdatePartnerData,
    ) -> Result<PartnerRecord, PartnerRepositoryError>;

    async fn delete_partner(&self, id: i32) -> Result<(), PartnerRepositoryError>;
}
