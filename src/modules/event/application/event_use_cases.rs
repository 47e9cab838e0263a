use std::sync::Arc;

use crate::modules::event::application::use_cases::{
    ICreateEventUseCase, IDeleteEventUseCase, IGetEventsUseCase, IUpdateEventUseCase,
};

#[derive(Clone)]
pub struct EventUseCases {
    pub get_list: Arc<dyn IGetEventsUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateEventUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateEventUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteEventUseCase + Send + Sync>,
}
