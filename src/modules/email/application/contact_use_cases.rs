use std::sync::Arc;

use crate::modules::email::application::use_cases::ISendContactMessageUseCase;

#[derive(Clone)]
pub struct ContactUseCases {
    pub send: Arc<dyn ISendContactMessageUseCase + Send + Sync>,
}
