//! Depot helper extensions.

use std::{any::Any, sync::Arc};

use salvo::prelude::Depot;

use crate::{errors::ApiError, state::State};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    /// The shared application state injected at the router root.
    fn state(&self) -> Result<&Arc<State>, ApiError> {
        self.obtain_or_500::<Arc<State>>()
    }
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| {
            ApiError::internal(
                "depot lookup failed",
                &std::any::type_name::<T>(),
            )
        })
    }
}
