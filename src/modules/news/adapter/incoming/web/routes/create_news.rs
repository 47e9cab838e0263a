use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::news::application::ports::outgoing::CreateNewsData;
use crate::modules::news::application::use_cases::CreateNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateNewsRequest {
    pub title: String,
    pub body: String,
    pub image: String,
}

#[post("/api/news")]
pub async fn create_news_handler(
    req: web::Json<CreateNewsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let news_data = CreateNewsData {
        title: req.title,
        body: req.body,
        image_path: req.image,
    };

    match data.news.create.execute(news_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateNewsError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(CreateNewsError::RepositoryError(e)) => {
            error!("Repository error creating news: {}", e);
            ApiResponse::internal_error()
        }
    }
}
