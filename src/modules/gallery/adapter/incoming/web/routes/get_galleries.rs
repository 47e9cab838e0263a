use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::gallery::application::ports::incoming::use_cases::GetGalleriesError;
use crate::modules::gallery::application::ports::outgoing::GalleryRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List galleries
///
/// Returns every gallery with its image, ordered by id.
#[utoipa::path(
    get,
    path = "/api/galleries",
    tag = "galleries",
    responses(
        (status = 200, description = "Gallery list", body = inline(SuccessResponse<Vec<GalleryRecord>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/galleries")]
pub async fn get_galleries_handler(data: web::Data<AppState>) -> impl Responder {
    match data.gallery.get_list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(GetGalleriesError::RepositoryError(e)) => {
            error!("Repository error listing galleries: {}", e);
            ApiResponse::internal_error()
        }
    }
}
