use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteSettings {
    pub club_name: String,
    pub contact_email: String,
    pub instagram_url: Option<String>,
    pub hero_tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsData {
    pub club_name: String,
    pub contact_email: String,
    pub instagram_url: Option<String>,
    pub hero_tagline: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SettingsRepositoryError {
    DatabaseError(String),
}

/// The settings table holds a single row. `load_settings` inserts the
/// defaults on first read so callers never see an empty table.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load_settings(&self) -> Result<SiteSettings, SettingsRepositoryError>;

    async fn save_settings(
        &self,
        data: SettingsData,
    ) -> Result<SiteSettings, SettingsRepositoryError>;
}
