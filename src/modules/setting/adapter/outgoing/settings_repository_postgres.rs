use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};

use crate::modules::setting::adapter::outgoing::sea_orm_entity::{self as settings, Entity};
use crate::modules::setting::application::ports::outgoing::{
    SettingsData, SettingsRepository, SettingsRepositoryError, SiteSettings,
};

// Single-row table keyed by this id.
const SETTINGS_ROW_ID: i32 = 1;

#[derive(Clone)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn load_settings(&self) -> Result<SiteSettings, SettingsRepositoryError> {
        if let Some(model) = Entity::find_by_id(SETTINGS_ROW_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            return Ok(to_settings(model));
        }

        let defaults = settings::ActiveModel {
            id: Set(SETTINGS_ROW_ID),
            club_name: Set("Utopia Club".to_string()),
            contact_email: Set("hello@utopia.club".to_string()),
            instagram_url: Set(None),
            hero_tagline: Set(None),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = defaults.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_settings(inserted))
    }

    async fn save_settings(
        &self,
        data: SettingsData,
    ) -> Result<SiteSettings, SettingsRepositoryError> {
        // Ensure the row exists before updating it.
        self.load_settings().await?;

        let model = settings::ActiveModel {
            id: Set(SETTINGS_ROW_ID),
            club_name: Set(data.club_name.trim().to_string()),
            contact_email: Set(data.contact_email.trim().to_string()),
            instagram_url: Set(data.instagram_url),
            hero_tagline: Set(data.hero_tagline),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(to_settings(updated))
    }
}

fn to_settings(model: settings::Model) -> SiteSettings {
    SiteSettings {
        club_name: model.club_name,
        contact_email: model.contact_email,
        instagram_url: model.instagram_url,
        hero_tagline: model.hero_tagline,
    }
}

fn map_db_err(e: DbErr) -> SettingsRepositoryError {
    SettingsRepositoryError::DatabaseError(e.to_string())
}
