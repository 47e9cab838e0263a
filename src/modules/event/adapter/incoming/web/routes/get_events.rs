use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::event::application::use_cases::GetEventsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/events")]
pub async fn get_events_handler(data: web::Data<AppState>) -> impl Responder {
    match data.event.get_list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(GetEventsError::RepositoryError(e)) => {
            error!("Repository error listing events: {}", e);
            ApiResponse::internal_error()
        }
    }
}
