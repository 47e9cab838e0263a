pub mod ports;
pub mod setting_use_cases;
pub mod use_cases;

pub use setting_use_cases::SettingUseCases;
