use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsRecord {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub image_path: String,
    pub published_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNewsData {
    pub title: String,
    pub body: String,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNewsData {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub image_path: String,
}

#[derive(Debug, Clone)]
pub enum NewsRepositoryError {
    NotFound,
    DatabaseError(String),
}

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Ordered by `published_at` descending, newest first.
    async fn list_news(&self) -> Result<Vec<NewsRecord>, NewsRepositoryError>;

    async fn create_news(&self, data: CreateNewsData) -> Result<NewsRecord, NewsRepositoryError>;

    async fn update_news(&self, data: UpdateNewsData) -> Result<NewsRecord, NewsRepositoryError>;

    async fn delete_news(&self, id: i32) -> Result<(), NewsRepositoryError>;
}
