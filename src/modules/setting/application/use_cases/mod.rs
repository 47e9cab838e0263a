pub mod get_settings;
pub mod update_settings;

pub use get_settings::{GetSettingsError, GetSettingsUseCase, IGetSettingsUseCase};
pub use update_settings::{IUpdateSettingsUseCase, UpdateSettingsError, UpdateSettingsUseCase};
