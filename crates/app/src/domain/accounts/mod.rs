//! Accounts

pub mod errors;
pub mod models;
pub(crate) mod passwords;
pub(crate) mod repository;
pub mod service;

pub use errors::AccountsServiceError;
pub use service::*;
