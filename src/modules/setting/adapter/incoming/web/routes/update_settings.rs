use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::setting::application::ports::outgoing::SettingsData;
use crate::modules::setting::application::use_cases::UpdateSettingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub club_name: String,
    pub contact_email: String,
    pub instagram_url: Option<String>,
    pub hero_tagline: Option<String>,
}

#[put("/api/settings")]
pub async fn update_settings_handler(
    req: web::Json<UpdateSettingsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let settings_data = SettingsData {
        club_name: req.club_name,
        contact_email: req.contact_email,
        instagram_url: req.instagram_url,
        hero_tagline: req.hero_tagline,
    };

    match data.setting.update.execute(settings_data).await {
        Ok(settings) => ApiResponse::success(settings),

        Err(UpdateSettingsError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateSettingsError::RepositoryError(e)) => {
            error!("Repository error saving settings: {}", e);
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

    use crate::modules::setting::application::ports::outgoing::SiteSettings;
    use crate::modules::setting::application::use_cases::IUpdateSettingsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockUpdateSettings {
        result: Result<SiteSettings, UpdateSettingsError>,
    }

    #[async_trait]
    impl IUpdateSettingsUseCase for MockUpdateSettings {
        async fn execute(&self, _data: SettingsData) -> Result<SiteSettings, UpdateSettingsError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_update_settings_invalid_email_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_update_settings(MockUpdateSettings {
                result: Err(UpdateSettingsError::Validation(
                    "contact email must be a valid address".to_string(),
                )),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/settings")
            .set_json(UpdateSettingsRequest {
                club_name: "Utopia Club".to_string(),
                contact_email: "nope".to_string(),
                instagram_url: None,
                hero_tagline: None,
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_update_settings_success() {
        let app_state = TestAppStateBuilder::default()
            .with_update_settings(MockUpdateSettings {
                result: Ok(SiteSettings {
                    club_name: "Utopia Club".to_string(),
                    contact_email: "hello@utopia.club".to_string(),
                    instagram_url: None,
                    hero_tagline: Some("Exclusive NFT community".to_string()),
                }),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/settings")
            .set_json(UpdateSettingsRequest {
                club_name: "Utopia Club".to_string(),
                contact_email: "hello@utopia.club".to_string(),
                instagram_url: None,
                hero_tagline: Some("Exclusive NFT community".to_string()),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["hero_tagline"], "Exclusive NFT community");
    }
}
