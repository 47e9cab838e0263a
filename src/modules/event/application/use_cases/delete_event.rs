use async_trait::async_trait;

use crate::modules::event::application::ports::outgoing::{EventRepository, EventRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteEventError {
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteEventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteEventError::NotFound => write!(f, "event not found"),
            DeleteEventError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IDeleteEventUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteEventError>;
}

pub struct DeleteEventUseCase<R>
where
    R: EventRepository,
{
    event_repository: R,
}

impl<R> DeleteEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(event_repository: R) -> Self {
        Self { event_repository }
    }
}

#[async_trait]
impl<R> IDeleteEventUseCase for DeleteEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteEventError> {
        self.event_repository
            .delete_event(id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => DeleteEventError::NotFound,
                EventRepositoryError::DatabaseError(msg) => DeleteEventError::RepositoryError(msg),
            })
    }
}
