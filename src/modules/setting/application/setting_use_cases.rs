use std::sync::Arc;

use crate::modules::setting::application::use_cases::{IGetSettingsUseCase, IUpdateSettingsUseCase};

#[derive(Clone)]
pub struct SettingUseCases {
    pub get: Arc<dyn IGetSettingsUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateSettingsUseCase + Send + Sync>,
}
