//! Admin Handlers

pub(crate) mod audits;
pub(crate) mod inventory;
pub(crate) mod orders;
pub(crate) mod stats;
pub(crate) mod users;
