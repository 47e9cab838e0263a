use std::sync::Arc;

use crate::modules::partner::application::use_cases::{
    ICreatePartnerUseCase, IDeletePartnerUseCase, IGetPartnersUseCase, IUpdatePartnerUseCase,
};

#[derive(Clone)]
pub struct PartnerUseCases {
    pub get_list: Arc<dyn IGetPartnersUseCase + Send + Sync>,
    pub create: Arc<dyn ICreatePartnerUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdatePartnerUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeletePartnerUseCase + Send + Sync>,
}
