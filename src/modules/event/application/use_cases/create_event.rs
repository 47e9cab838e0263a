use async_trait::async_trait;

use crate::modules::event::application::ports::outgoing::{
    CreateEventData, EventRecord, EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone)]
pub enum CreateEventError {
    Validation(String),
    RepositoryError(String),
}

impl std::fmt::Display for CreateEventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateEventError::Validation(msg) => write!(f, "validation failed: {}", msg),
            CreateEventError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ICreateEventUseCase: Send + Sync {
    async fn execute(&self, data: CreateEventData) -> Result<EventRecord, CreateEventError>;
}

pub struct CreateEventUseCase<R>
where
    R: EventRepository,
{
    event_repository: R,
}

impl<R> CreateEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(event_repository: R) -> Self {
        Self { event_repository }
    }
}

#[async_trait]
impl<R> ICreateEventUseCase for CreateEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, data: CreateEventData) -> Result<EventRecord, CreateEventError> {
        if data.name.trim().is_empty() {
            return Err(CreateEventError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        if data.image_path.trim().is_empty() {
            return Err(CreateEventError::Validation(
                "image path must not be empty".to_string(),
            ));
        }

        self.event_repository
            .create_event(data)
            .await
            .map_err(|e| match e {
                EventRepositoryError::DatabaseError(msg) => CreateEventError::RepositoryError(msg),
                EventRepositoryError::NotFound => CreateEventError::RepositoryError(
                    "unexpected not found while creating event".to_string(),
                ),
            })
    }
}
