use async_trait::async_trait;

use crate::modules::setting::application::ports::outgoing::{
    SettingsData, SettingsRepository, SettingsRepositoryError, SiteSettings,
};

#[derive(Debug, Clone)]
pub enum UpdateSettingsError {
    Validation(String),
    RepositoryError(String),
}

impl std::fmt::Display for UpdateSettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateSettingsError::Validation(msg) => write!(f, "validation failed: {}", msg),
            UpdateSettingsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IUpdateSettingsUseCase: Send + Sync {
    async fn execute(&self, data: SettingsData) -> Result<SiteSettings, UpdateSettingsError>;
}

pub struct UpdateSettingsUseCase<R>
where
    R: SettingsRepository,
{
    settings_repository: R,
}

impl<R> UpdateSettingsUseCase<R>
where
    R: SettingsRepository,
{
    pub fn new(settings_repository: R) -> Self {
        Self {
            settings_repository,
        }
    }
}

#[async_trait]
impl<R> IUpdateSettingsUseCase for UpdateSettingsUseCase<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(&self, data: SettingsData) -> Result<SiteSettings, UpdateSettingsError> {
        if data.club_name.trim().is_empty() {
            return Err(UpdateSettingsError::Validation(
                "club name must not be empty".to_string(),
            ));
        }

        let email = data.contact_email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(UpdateSettingsError::Validation(
                "contact email must be a valid address".to_string(),
            ));
        }

        self.settings_repository
            .save_settings(data)
            .await
            .map_err(|SettingsRepositoryError::DatabaseError(msg)| {
                UpdateSettingsError::RepositoryError(msg)
            })
    }
}
