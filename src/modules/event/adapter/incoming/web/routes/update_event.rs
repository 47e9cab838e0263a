use actix_web::{put, web, Responder};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::event::application::ports::outgoing::UpdateEventData;
use crate::modules::event::application::use_cases::UpdateEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<FixedOffset>,
    pub image: String,
}

#[put("/api/events/{id}")]
pub async fn update_event_handler(
    path: web::Path<i32>,
    req: web::Json<UpdateEventRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let event_data = UpdateEventData {
        id,
        name: req.name,
        description: req.description,
        starts_at: req.starts_at,
        image_path: req.image,
    };

    match data.event.update.execute(event_data).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateEventError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(UpdateEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(UpdateEventError::RepositoryError(e)) => {
            error!("Repository error updating event {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
