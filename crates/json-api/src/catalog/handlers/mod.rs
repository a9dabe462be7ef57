//! Catalog Handlers

pub(crate) mod by_category;
pub(crate) mod categories;
pub(crate) mod get;
pub(crate) mod index;
