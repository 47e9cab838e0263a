use async_trait::async_trait;

use crate::modules::partner::application::ports::outgoing::{
    CreatePartnerData, PartnerRecord, PartnerRepository, PartnerRepositoryError,
};

#[derive(Debug, Clone)]
pub enum CreatePartnerError {
    Validation(String),
    RepositoryError(String),
}

impl std::fmt::Display for CreatePartnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatePartnerError::Validation(msg) => write!(f, "validation failed: {}", msg),
            CreatePartnerError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ICreatePartnerUseCase: Send + Sync {
    async fn execute(&self, data: CreatePartnerData) -> Result<PartnerRecord, CreatePartnerError>;
}

pub struct CreatePartnerUseCase<R>
where
    R: PartnerRepository,
{
    partner_repository: R,
}

impl<R> CreatePartnerUseCase<R>
where
    R: PartnerRepository,
{
    pub fn new(partner_repository: R) -> Self {
        Self { partner_repository }
    }
}

#[async_trait]
impl<R> ICreatePartnerUseCase for CreatePartnerUseCase<R>
where
    R: PartnerRepository + Send + Sync,
{
    async fn execute(&self, data: CreatePartnerData) -> Result<PartnerRecord, CreatePartnerError> {
        if data.name.trim().is_empty() {
            return Err(CreatePartnerError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        if data.image_path.trim().is_empty() {
            return Err(CreatePartnerError::Validation(
                "image path must not be empty".to_string(),
            ));
        }

        self.partner_repository
            .create_partner(data)
            .await
            .map_err(|e| match e {
                PartnerRepositoryError::DatabaseError(msg) => {
                    CreatePartnerError::RepositoryError(msg)
                }
                PartnerRepositoryError::NotFound => CreatePartnerError::RepositoryError(
                    "unexpected not found while creating partner".to_string(),
                ),
            })
    }
}
