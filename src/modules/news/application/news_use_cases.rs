use std::sync::Arc;

use crate::modules::news::application::use_cases::{
    ICreateNewsUseCase, IDeleteNewsUseCase, IGetNewsUseCase, IUpdateNewsUseCase,
};

#[derive(Clone)]
pub struct NewsUseCases {
    pub get_list: Arc<dyn IGetNewsUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateNewsUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateNewsUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteNewsUseCase + Send + Sync>,
}
