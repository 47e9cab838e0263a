use actix_web::{post, web, Responder};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::event::application::ports::outgoing::CreateEventData;
use crate::modules::event::application::use_cases::CreateEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<FixedOffset>,
    pub image: String,
}

#[post("/api/events")]
pub async fn create_event_handler(
    req: web::Json<CreateEventRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let event_data = CreateEventData {
        name: req.name,
        description: req.description,
        starts_at: req.starts_at,
        image_path: req.image,
    };

    match data.event.create.execute(event_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateEventError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(CreateEventError::RepositoryError(e)) => {
            error!("Repository error creating event: {}", e);
            ApiResponse::internal_error()
        }
    }
}
