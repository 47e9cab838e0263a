pub mod alert;
pub mod api;
