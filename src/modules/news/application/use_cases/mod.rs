pub mod create_news;
pub mod delete_news;
pub mod get_news;
pub mod update_news;

pub use create_news::{CreateNewsError, CreateNewsUseCase, ICreateNewsUseCase};
pub use delete_news::{DeleteNewsError, DeleteNewsUseCase, IDeleteNewsUseCase};
pub use get_news::{GetNewsError, GetNewsUseCase, IGetNewsUseCase};
pub use update_news::{IUpdateNewsUseCase, UpdateNewsError, UpdateNewsUseCase};
