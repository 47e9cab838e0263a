pub mod create_news;
pub mod delete_news;
pub mod get_news;
pub mod update_news;

pub use create_news::{create_news_handler, CreateNewsRequest};
pub use delete_news::delete_news_handler;
pub use get_news::get_news_handler;
pub use update_news::{update_news_handler, UpdateNewsRequest};
