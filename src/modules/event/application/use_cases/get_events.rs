use async_trait::async_trait;

use crate::modules::event::application::ports::outgoing::{
    EventRecord, EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone)]
pub enum GetEventsError {
    RepositoryError(String),
}

impl std::fmt::Display for GetEventsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetEventsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IGetEventsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EventRecord>, GetEventsError>;
}

pub struct GetEventsUseCase<R>
where
    R: EventRepository,
{
    event_repository: R,
}

impl<R> GetEventsUseCase<R>
where
    R: EventRepository,
{
    pub fn new(event_repository: R) -> Self {
        Self { event_repository }
    }
}

#[async_trait]
impl<R> IGetEventsUseCase for GetEventsUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EventRecord>, GetEventsError> {
        self.event_repository
            .list_events()
            .await
            .map_err(|e| match e {
                EventRepositoryError::DatabaseError(msg) => GetEventsError::RepositoryError(msg),
                EventRepositoryError::NotFound => GetEventsError::RepositoryError(
                    "unexpected not found while listing events".to_string(),
                ),
            })
    }
}
