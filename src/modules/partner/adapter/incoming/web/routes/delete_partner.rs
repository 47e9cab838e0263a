use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::partner::application::use_cases::DeletePartnerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/partners/{id}")]
pub async fn delete_partner_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.partner.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeletePartnerError::NotFound) => {
            ApiResponse::not_found("PARTNER_NOT_FOUND", "Partner not found")
        }

        Err(DeletePartnerError::RepositoryError(e)) => {
            error!("Repository error deleting partner {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
