use async_trait::async_trait;

use crate::modules::partner::application::ports::outgoing::{
    PartnerRepository, PartnerRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeletePartnerError {
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeletePartnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeletePartnerError::NotFound => write!(f, "partner not found"),
            DeletePartnerError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IDeletePartnerUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeletePartnerError>;
}

pub struct DeletePartnerUseCase<R>
where
    R: PartnerRepository,
{
    partner_repository: R,
}

impl<R> DeletePartnerUseCase<R>
where
    R: PartnerRepository,
{
    pub fn new(partner_repository: R) -> Self {
        Self { partner_repository }
    }
}

#[async_trait]
impl<R> IDeletePartnerUseCase for DeletePartnerUseCase<R>
where
    R: PartnerRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeletePartnerError> {
        self.partner_repository
            .delete_partner(id)
            .await
            .map_err(|e| match e {
                PartnerRepositoryError::NotFound => DeletePartnerError::NotFound,
                PartnerRepositoryError::DatabaseError(msg) => {
                    DeletePartnerError::RepositoryError(msg)
                }
            })
    }
}
