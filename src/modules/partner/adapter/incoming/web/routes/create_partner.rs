use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::partner::application::ports::outgoing::CreatePartnerData;
use crate::modules::partner::application::use_cases::CreatePartnerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePartnerRequest {
    pub name: String,
    pub url: Option<String>,
    pub image: String,
}

#[post("/api/partners")]
pub async fn create_partner_handler(
    req: web::Json<CreatePartnerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let partner_data = CreatePartnerData {
        name: req.name,
        url: req.url,
        image_path: req.image,
    };

    match data.partner.create.execute(partner_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreatePartnerError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreatePartnerError::RepositoryError(e)) => {
            error!("Repository error creating partner: {}", e);
            ApiResponse::internal_error()
        }
    }
}
