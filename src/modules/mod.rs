pub mod email;
pub mod event;
pub mod gallery;
pub mod news;
pub mod partner;
pub mod setting;
pub mod upload;
