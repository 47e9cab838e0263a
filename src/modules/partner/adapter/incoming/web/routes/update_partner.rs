use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::partner::application::ports::outgoing::UpdatePartnerData;
use crate::modules::partner::application::use_cases::UpdatePartnerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdatePartnerRequest {
    pub name: String,
    pub url: Option<String>,
    pub image: String,
}

#[put("/api/partners/{id}")]
pub async fn update_partner_handler(
    path: web::Path<i32>,
    req: web::Json<UpdatePartnerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let partner_data = UpdatePartnerData {
        id,
        name: req.name,
        url: req.url,
        image_path: req.image,
    };

    match data.partner.update.execute(partner_data).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdatePartnerError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdatePartnerError::NotFound) => {
            ApiResponse::not_found("PARTNER_NOT_FOUND", "Partner not found")
        }

        Err(UpdatePartnerError::RepositoryError(e)) => {
            error!("Repository error updating partner {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
