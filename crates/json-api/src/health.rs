//! Health Check Handler

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*};

const SERVER_STATUS: &str = "Server running";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    pub success: bool,

    /// Always `Server running` when the process answers
    pub status: String,

    /// `connected` or `disconnected`
    pub database: String,

    /// Time the check ran
    pub timestamp: String,
}

/// Health Check Handler
///
/// Reports whether the store answers. A dead store still yields a 200.
#[endpoint(tags("health"), summary = "Health Check")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, ApiError> {
    let connected = depot.state()?.app.health.database_connected().await;

    Ok(Json(HealthResponse {
        success: true,
        status: SERVER_STATUS.to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        timestamp: Timestamp::now().to_string(),
    }))
}
