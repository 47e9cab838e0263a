pub mod orchestrator;
pub mod ports;
pub mod upload_policy;
