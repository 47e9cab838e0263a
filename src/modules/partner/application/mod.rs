pub mod partner_use_cases;
pub mod ports;
pub mod use_cases;

pub use partner_use_cases::PartnerUseCases;
