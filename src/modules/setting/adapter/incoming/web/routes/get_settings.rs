use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::setting::application::use_cases::GetSettingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/settings")]
pub async fn get_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.setting.get.execute().await {
        Ok(settings) => ApiResponse::success(settings),
        Err(GetSettingsError::RepositoryError(e)) => {
            error!("Repository error loading settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
