pub mod access;
pub mod catalog;
pub mod contracts;
pub mod data_transfer;
pub mod errors;
pub mod region_resolver;
pub mod request;
