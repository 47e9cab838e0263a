pub mod news_repository;

pub use news_repository::{
    CreateNewsData, NewsRecord, NewsRepository, NewsRepositoryError, UpdateNewsData,
};
