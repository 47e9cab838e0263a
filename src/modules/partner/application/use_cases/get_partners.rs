use async_trait::async_trait;

use crate::modules::partner::application::ports::outgoing::{
    PartnerRecord, PartnerRepository, PartnerRepositoryError,
};

#[derive(Debug, Clone)]
pub enum GetPartnersError {
    RepositoryError(String),
}

impl std::fmt::Display for GetPartnersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetPartnersError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IGetPartnersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PartnerRecord>, GetPartnersError>;
}

pub struct GetPartnersUseCase<R>
where
    R: PartnerRepository,
{
    partner_repository: R,
}

impl<R> GetPartnersUseCase<R>
where
    R: PartnerRepository,
{
    pub fn new(partner_repository: R) -> Self {
        Self { partner_repository }
    }
}

#[async_trait]
impl<R> IGetPartnersUseCase for GetPartnersUseCase<R>
where
    R: PartnerRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PartnerRecord>, GetPartnersError> {
        self.partner_repository
            .list_partners()
            .await
            .map_err(|e| match e {
                PartnerRepositoryError::DatabaseError(msg) => {
                    GetPartnersError::RepositoryError(msg)
                }
                PartnerRepositoryError::NotFound => GetPartnersError::RepositoryError(
                    "unexpected not found while listing partners".to_string(),
                ),
            })
    }
}
