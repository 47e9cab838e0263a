use async_trait::async_trait;

use crate::modules::news::application::ports::outgoing::{
    CreateNewsData, NewsRecord, NewsRepository, NewsRepositoryError,
};

#[derive(Debug, Clone)]
pub enum CreateNewsError {
    Validation(String),
    RepositoryError(String),
}

impl std::fmt::Display for CreateNewsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateNewsError::Validation(msg) => write!(f, "validation failed: {}", msg),
            CreateNewsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ICreateNewsUseCase: Send + Sync {
    async fn execute(&self, data: CreateNewsData) -> Result<NewsRecord, CreateNewsError>;
}

pub struct CreateNewsUseCase<R>
where
    R: NewsRepository,
{
    news_repository: R,
}

impl<R> CreateNewsUseCase<R>
where
    R: NewsRepository,
{
    pub fn new(news_repository: R) -> Self {
        Self { news_repository }
    }
}

#[async_trait]
impl<R> ICreateNewsUseCase for CreateNewsUseCase<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, data: CreateNewsData) -> Result<NewsRecord, CreateNewsError> {
        if data.title.trim().is_empty() {
            return Err(CreateNewsError::Validation(
                "title must not be empty".to_string(),
            ));
        }

        if data.image_path.trim().is_empty() {
            return Err(CreateNewsError::Validation(
                "image path must not be empty".to_string(),
            ));
        }

        self.news_repository
            .create_news(data)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::DatabaseError(msg) => CreateNewsError::RepositoryError(msg),
                NewsRepositoryError::NotFound => CreateNewsError::RepositoryError(
                    "unexpected not found while creating news".to_string(),
                ),
            })
    }
}
