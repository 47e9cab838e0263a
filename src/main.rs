pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::modules::email::adapter::outgoing::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::email::application::use_cases::SendContactMessageUseCase;
use crate::modules::email::application::ContactUseCases;
use crate::modules::event::adapter::outgoing::EventRepositoryPostgres;
use crate::modules::event::application::use_cases::{
    CreateEventUseCase, DeleteEventUseCase, GetEventsUseCase, UpdateEventUseCase,
};
use crate::modules::event::application::EventUseCases;
use crate::modules::gallery::adapter::outgoing::GalleryRepositoryPostgres;
use crate::modules::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::modules::gallery::application::service::{
    CreateGalleryService, DeleteGalleryService, GetGalleriesService, UpdateGalleryService,
};
use crate::modules::news::adapter::outgoing::NewsRepositoryPostgres;
use crate::modules::news::application::use_cases::{
    CreateNewsUseCase, DeleteNewsUseCase, GetNewsUseCase, UpdateNewsUseCase,
};
use crate::modules::news::application::NewsUseCases;
use crate::modules::partner::adapter::outgoing::PartnerRepositoryPostgres;
use crate::modules::partner::application::use_cases::{
    CreatePartnerUseCase, DeletePartnerUseCase, GetPartnersUseCase, UpdatePartnerUseCase,
};
use crate::modules::partner::application::PartnerUseCases;
use crate::modules::setting::adapter::outgoing::SettingsRepositoryPostgres;
use crate::modules::setting::application::use_cases::{GetSettingsUseCase, UpdateSettingsUseCase};
use crate::modules::setting::application::SettingUseCases;
use crate::shared::api::json_config::custom_json_config;

#[derive(Clone)]
pub struct AppState {
    pub gallery: GalleryUseCases,
    pub event: EventUseCases,
    pub partner: PartnerUseCases,
    pub news: NewsUseCases,
    pub setting: SettingUseCases,
    pub contact: ContactUseCases,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let server_url = format!("{}:{}", config.host, config.port);
    info!("Server runs on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to connect to database: {}", e)))?;
    let db_arc = Arc::new(conn);

    // SMTP transport: relay with credentials behind TLS, plain local
    // transport otherwise (Mailpit, MailHog, etc.)
    let smtp_sender = if config.smtp.tls {
        SmtpEmailSender::new(
            &config.smtp.host,
            &config.smtp.username,
            &config.smtp.password,
            &config.smtp.from_email,
        )
        .map_err(std::io::Error::other)?
    } else {
        SmtpEmailSender::new_local(&config.smtp.host, config.smtp.port, &config.smtp.from_email)
    };
    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);

    // Repositories and use-case bundles
    let gallery_repo = GalleryRepositoryPostgres::new(Arc::clone(&db_arc));
    let gallery = GalleryUseCases {
        get_list: Arc::new(GetGalleriesService::new(gallery_repo.clone())),
        create: Arc::new(CreateGalleryService::new(gallery_repo.clone())),
        update: Arc::new(UpdateGalleryService::new(gallery_repo.clone())),
        delete: Arc::new(DeleteGalleryService::new(gallery_repo)),
    };

    let event_repo = EventRepositoryPostgres::new(Arc::clone(&db_arc));
    let event = EventUseCases {
        get_list: Arc::new(GetEventsUseCase::new(event_repo.clone())),
        create: Arc::new(CreateEventUseCase::new(event_repo.clone())),
        update: Arc::new(UpdateEventUseCase::new(event_repo.clone())),
        delete: Arc::new(DeleteEventUseCase::new(event_repo)),
    };

    let partner_repo = PartnerRepositoryPostgres::new(Arc::clone(&db_arc));
    let partner = PartnerUseCases {
        get_list: Arc::new(GetPartnersUseCase::new(partner_repo.clone())),
        create: Arc::new(CreatePartnerUseCase::new(partner_repo.clone())),
        update: Arc::new(UpdatePartnerUseCase::new(partner_repo.clone())),
        delete: Arc::new(DeletePartnerUseCase::new(partner_repo)),
    };

    let news_repo = NewsRepositoryPostgres::new(Arc::clone(&db_arc));
    let news = NewsUseCases {
        get_list: Arc::new(GetNewsUseCase::new(news_repo.clone())),
        create: Arc::new(CreateNewsUseCase::new(news_repo.clone())),
        update: Arc::new(UpdateNewsUseCase::new(news_repo.clone())),
        delete: Arc::new(DeleteNewsUseCase::new(news_repo)),
    };

    let settings_repo = SettingsRepositoryPostgres::new(Arc::clone(&db_arc));
    let setting = SettingUseCases {
        get: Arc::new(GetSettingsUseCase::new(settings_repo.clone())),
        update: Arc::new(UpdateSettingsUseCase::new(settings_repo)),
    };

    let contact = ContactUseCases {
        send: Arc::new(SendContactMessageUseCase::new(
            Arc::clone(&email_sender),
            &config.contact_inbox,
        )),
    };

    let state = AppState {
        gallery,
        event,
        partner,
        news,
        setting,
        contact,
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Galleries
    cfg.service(crate::modules::gallery::adapter::incoming::web::routes::get_galleries_handler);
    cfg.service(crate::modules::gallery::adapter::incoming::web::routes::create_gallery_handler);
    cfg.service(crate::modules::gallery::adapter::incoming::web::routes::update_gallery_handler);
    cfg.service(crate::modules::gallery::adapter::incoming::web::routes::delete_gallery_handler);
    // Events
    cfg.service(crate::modules::event::adapter::incoming::web::routes::get_events_handler);
    cfg.service(crate::modules::event::adapter::incoming::web::routes::create_event_handler);
    cfg.service(crate::modules::event::adapter::incoming::web::routes::update_event_handler);
    cfg.service(crate::modules::event::adapter::incoming::web::routes::delete_event_handler);
    // Partners
    cfg.service(crate::modules::partner::adapter::incoming::web::routes::get_partners_handler);
    cfg.service(crate::modules::partner::adapter::incoming::web::routes::create_partner_handler);
    cfg.service(crate::modules::partner::adapter::incoming::web::routes::update_partner_handler);
    cfg.service(crate::modules::partner::adapter::incoming::web::routes::delete_partner_handler);
    // News
    cfg.service(crate::modules::news::adapter::incoming::web::routes::get_news_handler);
    cfg.service(crate::modules::news::adapter::incoming::web::routes::create_news_handler);
    cfg.service(crate::modules::news::adapter::incoming::web::routes::update_news_handler);
    cfg.service(crate::modules::news::adapter::incoming::web::routes::delete_news_handler);
    // Settings
    cfg.service(crate::modules::setting::adapter::incoming::web::routes::get_settings_handler);
    cfg.service(crate::modules::setting::adapter::incoming::web::routes::update_settings_handler);
    // Contact
    cfg.service(crate::modules::email::adapter::incoming::web::routes::send_contact_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
