pub mod settings_repository;

pub use settings_repository::{
    SettingsData, SettingsRepository, SettingsRepositoryError, SiteSettings,
};
