pub mod data_uri_store;

pub use data_uri_store::DataUriStore;
