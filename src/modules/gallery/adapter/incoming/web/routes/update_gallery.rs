use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::gallery::application::ports::incoming::use_cases::UpdateGalleryError;
use crate::modules::gallery::application::ports::outgoing::{GalleryRecord, UpdateGalleryData};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateGalleryRequest {
    #[schema(example = "Summer Party")]
    pub name: String,

    #[schema(example = "Beach bash for holders")]
    pub description: Option<String>,

    /// Persisted image path; unchanged submits carry the stored path back
    #[schema(example = "https://cdn.utopia.club/summer.webp")]
    pub image: String,
}

/// Update a gallery
#[utoipa::path(
    put,
    path = "/api/galleries/{id}",
    tag = "galleries",
    params(("id" = i32, Path, description = "Gallery id")),
    request_body = UpdateGalleryRequest,
    responses(
        (status = 200, description = "Gallery updated", body = inline(SuccessResponse<GalleryRecord>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Gallery not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/galleries/{id}")]
pub async fn update_gallery_handler(
    path: web::Path<i32>,
    req: web::Json<UpdateGalleryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let update_data = UpdateGalleryData {
        id,
        name: req.name,
        description: req.description,
        image_path: req.image,
    };

    match data.gallery.update.execute(update_data).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateGalleryError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateGalleryError::NotFound) => {
            ApiResponse::not_found("GALLERY_NOT_FOUND", "Gallery not found")
        }

        Err(UpdateGalleryError::RepositoryError(e)) => {
            error!("Repository error updating gallery {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
