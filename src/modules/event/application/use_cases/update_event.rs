use async_trait::async_trait;

use crate::modules::event::application::ports::outgoing::{
    EventRecord, EventRepository, EventRepositoryError, UpdateEventData,
};

#[derive(Debug, Clone)]
pub enum UpdateEventError {
    Validation(String),
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for UpdateEventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateEventError::Validation(msg) => write!(f, "validation failed: {}", msg),
            UpdateEventError::NotFound => write!(f, "event not found"),
            UpdateEventError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IUpdateEventUseCase: Send + Sync {
    async fn execute(&self, data: UpdateEventData) -> Result<EventRecord, UpdateEventError>;
}

pub struct UpdateEventUseCase<R>
where
    R: EventRepository,
{
    event_repository: R,
}

impl<R> UpdateEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(event_repository: R) -> Self {
        Self { event_repository }
    }
}

#[async_trait]
impl<R> IUpdateEventUseCase for UpdateEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, data: UpdateEventData) -> Result<EventRecord, UpdateEventError> {
        if data.name.trim().is_empty() {
            return Err(UpdateEventError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        if data.image_path.trim().is_empty() {
            return Err(UpdateEventError::Validation(
                "image path must not be empty".to_string(),
            ));
        }

        self.event_repository
            .update_event(data)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => UpdateEventError::NotFound,
                EventRepositoryError::DatabaseError(msg) => UpdateEventError::RepositoryError(msg),
            })
    }
}
