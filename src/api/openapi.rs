use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::modules::gallery::adapter::incoming::web::routes::{
    CreateGalleryRequest, UpdateGalleryRequest,
};
use crate::modules::gallery::application::ports::outgoing::{GalleryRecord, ImageRecord};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Utopia Club API",
        version = "1.0.0",
        description = "API documentation for the Utopia Club site and admin CMS",
        contact(
            name = "API Support",
            email = "hello@utopia.club"
        )
    ),
    paths(
        // Gallery endpoints
        crate::modules::gallery::adapter::incoming::web::routes::get_galleries::get_galleries_handler,
        crate::modules::gallery::adapter::incoming::web::routes::create_gallery::create_gallery_handler,
        crate::modules::gallery::adapter::incoming::web::routes::update_gallery::update_gallery_handler,
        crate::modules::gallery::adapter::incoming::web::routes::delete_gallery::delete_gallery_handler,

        // Event endpoints
        // get_events_handler,
        // create_event_handler,
        // update_event_handler,
        // delete_event_handler,

        // Partner endpoints
        // get_partners_handler,
        // create_partner_handler,
        // update_partner_handler,
        // delete_partner_handler,

        // News endpoints
        // get_news_handler,
        // create_news_handler,
        // update_news_handler,
        // delete_news_handler,

        // Settings endpoints
        // get_settings_handler,
        // update_settings_handler,

        // Contact endpoint
        // send_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<GalleryRecord>,
            ErrorResponse,
            ErrorDetail,

            // Gallery DTOs
            GalleryRecord,
            ImageRecord,
            CreateGalleryRequest,
            UpdateGalleryRequest
        )
    ),
    tags(
        (name = "galleries", description = "Gallery management endpoints"),
        (name = "events", description = "Event management endpoints"),
        (name = "partners", description = "Partner management endpoints"),
        (name = "news", description = "News management endpoints"),
        (name = "settings", description = "Site settings endpoints"),
        (name = "contact", description = "Contact mail endpoint"),
    )
)]
pub struct ApiDoc;
