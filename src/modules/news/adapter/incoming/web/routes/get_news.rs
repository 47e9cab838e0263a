use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::news::application::use_cases::GetNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/news")]
pub async fn get_news_handler(data: web::Data<AppState>) -> impl Responder {
    match data.news.get_list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(GetNewsError::RepositoryError(e)) => {
            error!("Repository error listing news: {}", e);
            ApiResponse::internal_error()
        }
    }
}
