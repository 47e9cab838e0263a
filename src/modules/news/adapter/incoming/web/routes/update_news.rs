use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::news::application::ports::outgoing::UpdateNewsData;
use crate::modules::news::application::use_cases::UpdateNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateNewsRequest {
    pub title: String,
    pub body: String,
    pub image: String,
}

#[put("/api/news/{id}")]
pub async fn update_news_handler(
    path: web::Path<i32>,
    req: web::Json<UpdateNewsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let news_data = UpdateNewsData {
        id,
        title: req.title,
        body: req.body,
        image_path: req.image,
    };

    match data.news.update.execute(news_data).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateNewsError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(UpdateNewsError::NotFound) => {
            ApiResponse::not_found("NEWS_NOT_FOUND", "News item not found")
        }

        Err(UpdateNewsError::RepositoryError(e)) => {
            error!("Repository error updating news {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
