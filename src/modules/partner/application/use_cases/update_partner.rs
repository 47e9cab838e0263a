use async_trait::async_trait;

use crate::modules::partner::application::ports::outgoing::{
    PartnerRecord, PartnerRepository, PartnerRepositoryError, UpdatePartnerData,
};

#[derive(Debug, Clone)]
pub enum UpdatePartnerError {
    Validation(String),
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for UpdatePartnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdatePartnerError::Validation(msg) => write!(f, "validation failed: {}", msg),
            UpdatePartnerError::NotFound => write!(f, "partner not found"),
            UpdatePartnerError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IUpdatePartnerUseCase: Send + Sync {
    async fn execute(&self, data: UpdatePartnerData) -> Result<PartnerRecord, UpdatePartnerError>;
}

pub struct UpdatePartnerUseCase<R>
where
    R: PartnerRepository,
{
    partner_repository: R,
}

impl<R> UpdatePartnerUseCase<R>
where
    R: PartnerRepository,
{
    pub fn new(partner_repository: R) -> Self {
        Self { partner_repository }
    }
}

#[async_trait]
impl<R> IUpdatePartnerUseCase for UpdatePartnerUseCase<R>
where
    R: PartnerRepository + Send + Sync,
{
    async fn execute(&self, data: UpdatePartnerData) -> Result<PartnerRecord, UpdatePartnerError> {
        if data.name.trim().is_empty() {
            return Err(UpdatePartnerError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        if data.image_path.trim().is_empty() {
            return Err(UpdatePartnerError::Validation(
                "image path must not be empty".to_string(),
            ));
        }

        self.partner_repository
            .update_partner(data)
            .await
            .map_err(|e| match e {
                PartnerRepositoryError::NotFound => UpdatePartnerError::NotFound,
                PartnerRepositoryError::DatabaseError(msg) => {
                    UpdatePartnerError::RepositoryError(msg)
                }
            })
    }
}
