use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::news::application::use_cases::DeleteNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/news/{id}")]
pub async fn delete_news_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();

    match data.news.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteNewsError::NotFound) => {
            ApiResponse::not_found("NEWS_NOT_FOUND", "News item not found")
        }

        Err(DeleteNewsError::RepositoryError(e)) => {
            error!("Repository error deleting news {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
