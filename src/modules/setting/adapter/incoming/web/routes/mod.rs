pub mod get_settings;
pub mod update_settings;

pub use get_settings::get_settings_handler;
pub use update_settings::{update_settings_handler, UpdateSettingsRequest};
