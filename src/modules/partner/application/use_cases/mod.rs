pub mod create_partner;
pub mod delete_partner;
pub mod get_partners;
pub mod update_partner;

pub use create_partner::{CreatePartnerError, CreatePartnerUseCase, ICreatePartnerUseCase};
pub use delete_partner::{DeletePartnerError, DeletePartnerUseCase, IDeletePartnerUseCase};
pub use get_partners::{GetPartnersError, GetPartnersUseCase, IGetPartnersUseCase};
pub use update_partner::{IUpdatePartnerUseCase, UpdatePartnerError, UpdatePartnerUseCase};
