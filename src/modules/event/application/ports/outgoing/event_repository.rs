use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventRecord {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<FixedOffset>,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventData {
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<FixedOffset>,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEventData {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<FixedOffset>,
    pub image_path: String,
}

#[derive(Debug, Clone)]
pub enum EventRepositoryError {
    NotFound,
    DatabaseError(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Ordered by `starts_at` ascending, upcoming first.
    async fn list_events(&self) -> Result<Vec<EventRecord>, EventRepositoryError>;

    async fn create_event(&self, data: CreateEventData)
        -> Result<EventRecord, EventRepositoryError>;

    async fn update_event(&self, data: UpdateEventData)
        -> Result<EventRecord, EventRepositoryError>;

    async fn delete_event(&self, id: i32) -> Result<(), EventRepositoryError>;
}
