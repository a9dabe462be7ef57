//! Health

pub mod service;

pub use service::*;
