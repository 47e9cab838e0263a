use async_trait::async_trait;

use crate::modules::news::application::ports::outgoing::{NewsRepository, NewsRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteNewsError {
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteNewsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteNewsError::NotFound => write!(f, "news item not found"),
            DeleteNewsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IDeleteNewsUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteNewsError>;
}

pub struct DeleteNewsUseCase<R>
where
    R: NewsRepository,
{
    news_repository: R,
}

impl<R> DeleteNewsUseCase<R>
where
    R: NewsRepository,
{
    pub fn new(news_repository: R) -> Self {
        Self { news_repository }
    }
}

#[async_trait]
impl<R> IDeleteNewsUseCase for DeleteNewsUseCase<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteNewsError> {
        self.news_repository
            .delete_news(id)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::NotFound => DeleteNewsError::NotFound,
                NewsRepositoryError::DatabaseError(msg) => DeleteNewsError::RepositoryError(msg),
            })
    }
}
