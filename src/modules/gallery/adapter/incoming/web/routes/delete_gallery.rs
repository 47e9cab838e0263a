use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::gallery::application::ports::incoming::use_cases::DeleteGalleryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a gallery
///
/// Removes the gallery and the image row it owns.
#[utoipa::path(
    delete,
    path = "/api/galleries/{id}",
    tag = "galleries",
    params(("id" = i32, Path, description = "Gallery id")),
    responses(
        (status = 204, description = "Gallery deleted"),
        (status = 404, description = "Gallery not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/galleries/{id}")]
pub async fn delete_gallery_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.gallery.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteGalleryError::NotFound) => {
            ApiResponse::not_found("GALLERY_NOT_FOUND", "Gallery not found")
        }

        Err(DeleteGalleryError::RepositoryError(e)) => {
            error!("Repository error deleting gallery {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
