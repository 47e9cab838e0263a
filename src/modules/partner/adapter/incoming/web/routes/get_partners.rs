use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::partner::application::use_cases::GetPartnersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/partners")]
pub async fn get_partners_handler(data: web::Data<AppState>) -> impl Responder {
    match data.partner.get_list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(GetPartnersError::RepositoryError(e)) => {
            error!("Repository error listing partners: {}", e);
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

    use crate::modules::partner::application::ports::outgoing::PartnerRecord;
    use crate::modules::partner::application::use_cases::IGetPartnersUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockGetPartners {
        result: Result<Vec<PartnerRecord>, GetPartnersError>,
    }

    #[async_trait]
    impl IGetPartnersUseCase for MockGetPartners {
        async fn execute(&self) -> Result<Vec<PartnerRecord>, GetPartnersError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_partners_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_partners(MockGetPartners {
                result: Ok(vec![PartnerRecord {
                    id: 1,
                    name: "Ledger".to_string(),
                    url: None,
                    image_path: "https://cdn.utopia.club/ledger.webp".to_string(),
                }]),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_partners_handler)).await;

        let req = test::TestRequest::get().uri("/api/partners").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["name"], "Ledger");
    }
}
