use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::email::application::use_cases::{ContactMessage, SendContactMessageError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[post("/api/contact")]
pub async fn send_contact_handler(
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let message = ContactMessage {
        name: req.name,
        email: req.email,
        message: req.message,
    };

    match data.contact.send.execute(message).await {
        Ok(()) => ApiResponse::success(json!({ "sent": true })),

        Err(SendContactMessageError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SendContactMessageError::SendFailed(e)) => {
            error!("Failed to send contact mail: {}", e);
            ApiResponse::bad_gateway("MAIL_SEND_FAILED", "Could not deliver the message")
        }
    }
}
