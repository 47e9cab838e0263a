pub mod partner_repository;

pub use partner_repository::{
    CreatePartnerData, PartnerRecord, PartnerRepository, PartnerRepositoryError, UpdatePartnerData,
};
