use async_trait::async_trait;

use crate::modules::setting::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError, SiteSettings,
};

#[derive(Debug, Clone)]
pub enum GetSettingsError {
    RepositoryError(String),
}

impl std::fmt::Display for GetSettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetSettingsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IGetSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SiteSettings, GetSettingsError>;
}

pub struct GetSettingsUseCase<R>
where
    R: SettingsRepository,
{
    settings_repository: R,
}

impl<R> GetSettingsUseCase<R>
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
impl<R> IGetSettingsUseCase for GetSettingsUseCase<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SiteSettings, GetSettingsError> {
        self.settings_repository
            .load_settings()
            .await
            .map_err(|SettingsRepositoryError::DatabaseError(msg)| {
                GetSettingsError::RepositoryError(msg)
            })
    }
}
