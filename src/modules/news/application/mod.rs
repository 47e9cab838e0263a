pub mod news_use_cases;
pub mod ports;
pub mod use_cases;

pub use news_use_cases::NewsUseCases;
