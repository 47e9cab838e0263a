use async_trait::async_trait;

use crate::modules::news::application::ports::outgoing::{
    NewsRecord, NewsRepository, NewsRepositoryError,
};

#[derive(Debug, Clone)]
pub enum GetNewsError {
    RepositoryError(String),
}

impl std::fmt::Display for GetNewsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetNewsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IGetNewsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<NewsRecord>, GetNewsError>;
}

pub struct GetNewsUseCase<R>
where
    R: NewsRepository,
{
    news_repository: R,
}

impl<R> GetNewsUseCase<R>
where
    R: NewsRepository,
{
    pub fn new(news_repository: R) -> Self {
        Self { news_repository }
    }
}

#[async_trait]
impl<R> IGetNewsUseCase for GetNewsUseCase<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<NewsRecord>, GetNewsError> {
        self.news_repository.list_news().await.map_err(|e| match e {
            NewsRepositoryError::DatabaseError(msg) => GetNewsError::RepositoryError(msg),
            NewsRepositoryError::NotFound => {
                GetNewsError::RepositoryError("unexpected not found while listing news".to_string())
            }
        })
    }
}
