pub mod create_partner;
pub mod delete_partner;
pub mod get_partners;
pub mod update_partner;

pub use create_partner::{create_partner_handler, CreatePartnerRequest};
pub use delete_partner::delete_partner_handler;
pub use get_partners::get_partners_handler;
pub use update_partner::{update_partner_handler, UpdatePartnerRequest};
