use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::gallery::application::ports::incoming::use_cases::CreateGalleryError;
use crate::modules::gallery::application::ports::outgoing::{CreateGalleryData, GalleryRecord};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateGalleryRequest {
    /// Display name, non-empty
    #[schema(example = "Summer Party")]
    pub name: String,

    #[schema(example = "Beach bash for holders")]
    pub description: Option<String>,

    /// Persisted image path (URL or data URI)
    #[schema(example = "https://cdn.utopia.club/summer.webp")]
    pub image: String,
}

/// Create a gallery
///
/// Persists the image path and the gallery entry together.
#[utoipa::path(
    post,
    path = "/api/galleries",
    tag = "galleries",
    request_body = CreateGalleryRequest,
    responses(
        (status = 201, description = "Gallery created", body = inline(SuccessResponse<GalleryRecord>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/galleries")]
pub async fn create_gallery_handler(
    req: web::Json<CreateGalleryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let create_data = CreateGalleryData {
        name: req.name,
        description: req.description,
        image_path: req.image,
    };

    match data.gallery.create.execute(create_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateGalleryError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateGalleryError::RepositoryError(e)) => {
            error!("Repository error creating gallery: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::gallery::application::ports::incoming::use_cases::CreateGalleryUseCase;
    use crate::modules::gallery::application::ports::outgoing::ImageRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockCreateGalleryUseCase {
        result: Result<GalleryRecord, CreateGalleryError>,
    }

    #[async_trait]
    impl CreateGalleryUseCase for MockCreateGalleryUseCase {
        async fn execute(
            &self,
            _data: CreateGalleryData,
        ) -> Result<GalleryRecord, CreateGalleryError> {
            self.result.clone()
        }
    }

    fn base_request() -> CreateGalleryRequest {
        CreateGalleryRequest {
            name: "Summer Party".to_string(),
            description: Some("Beach bash".to_string()),
            image: "data:image/png;base64,aGVsbG8=".to_string(),
        }
    }

    fn created_record() -> GalleryRecord {
        GalleryRecord {
            id: 1,
            name: "Summer Party".to_string(),
            description: Some("Beach bash".to_string()),
            image: ImageRecord {
                id: 1,
                path: "data:image/png;base64,aGVsbG8=".to_string(),
            },
        }
    }

    #[actix_web::test]
    async fn test_create_gallery_success() {
        let app_state = TestAppStateBuilder::default()
            .with_create_gallery(MockCreateGalleryUseCase {
                result: Ok(created_record()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_gallery_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/galleries")
            .set_json(base_request())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Summer Party");
        assert_eq!(body["data"]["image"]["path"], "data:image/png;base64,aGVsbG8=");
    }

    #[actix_web::test]
    async fn test_create_gallery_validation_error_is_bad_request() {
        let app_state = TestAppStateBuilder::default()
            .with_create_gallery(MockCreateGalleryUseCase {
                result: Err(CreateGalleryError::Validation(
                    "name must not be empty".to_string(),
                )),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_gallery_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/galleries")
            .set_json(CreateGalleryRequest {
                name: "".to_string(),
                ..base_request()
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_create_gallery_repository_error_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_create_gallery(MockCreateGalleryUseCase {
                result: Err(CreateGalleryError::RepositoryError("db down".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_gallery_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/galleries")
            .set_json(base_request())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
