pub mod event_use_cases;
pub mod ports;
pub mod use_cases;

pub use event_use_cases::EventUseCases;
