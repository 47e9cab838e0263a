use async_trait::async_trait;

use crate::modules::news::application::ports::outgoing::{
    NewsRecord, NewsRepository, NewsRepositoryError, UpdateNewsData,
};

#[derive(Debug, Clone)]
pub enum UpdateNewsError {
    Validation(String),
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for UpdateNewsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateNewsError::Validation(msg) => write!(f, "validation failed: {}", msg),
            UpdateNewsError::NotFound => write!(f, "news item not found"),
            UpdateNewsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IUpdateNewsUseCase: Send + Sync {
    async fn execute(&self, data: UpdateNewsData) -> Result<NewsRecord, UpdateNewsError>;
}

pub struct UpdateNewsUseCase<R>
where
    R: NewsRepository,
{
    news_repository: R,
}

impl<R> UpdateNewsUseCase<R>
where
    R: NewsRepository,
{
    pub fn new(news_repository: R) -> Self {
        Self { news_repository }
    }
}

#[async_trait]
impl<R> IUpdateNewsUseCase for UpdateNewsUseCase<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, data: UpdateNewsData) -> Result<NewsRecord, UpdateNewsError> {
        if data.title.trim().is_empty() {
            return Err(UpdateNewsError::Validation(
                "title must not be empty".to_string(),
            ));
        }

        if data.image_path.trim().is_empty() {
            return Err(UpdateNewsError::Validation(
                "image path must not be empty".to_string(),
            ));
        }

        self.news_repository
            .update_news(data)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::NotFound => UpdateNewsError::NotFound,
                NewsRepositoryError::DatabaseError(msg) => UpdateNewsError::RepositoryError(msg),
            })
    }
}
