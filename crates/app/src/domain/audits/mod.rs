//! Audits
//!
//! Append-only trail of account and order events. Entries are written by the services that
//! own the events, inside their transactions, and read back by the admin reports.

pub mod models;
pub(crate) mod repository;
