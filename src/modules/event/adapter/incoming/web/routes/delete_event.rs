use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::event::application::use_cases::DeleteEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/events/{id}")]
pub async fn delete_event_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.event.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(DeleteEventError::RepositoryError(e)) => {
            error!("Repository error deleting event {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
