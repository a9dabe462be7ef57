//! Admin Audit Index Handler

use pharmacy_app::domain::audits::models::AuditEntry;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{admin::errors::into_api_error, errors::ApiError, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuditResponse {
    pub id: Uuid,

    /// Acting user
    pub user_id: Option<Uuid>,

    /// `user` or `order`
    pub entity_type: String,

    pub entity_id: Uuid,

    /// `user_registered`, `user_login` or `order_created`
    pub action: String,

    #[salvo(schema(value_type = Object))]
    pub detail: Value,

    pub created_at: String,
}

impl From<AuditEntry> for AuditResponse {
    fn from(entry: AuditEntry) -> Self {
        Self {
            id: entry.uuid.into_uuid(),
            user_id: entry.user_uuid.map(|user| user.into_uuid()),
            entity_type: entry.entity_type,
            entity_id: entry.entity_uuid,
            action: entry.action,
            detail: entry.detail,
            created_at: entry.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuditsResponse {
    pub success: bool,

    pub data: Vec<AuditResponse>,
}

/// Admin Audit Index Handler
///
/// The 200 newest audit entries.
#[endpoint(tags("admin"), summary = "List Audit Entries")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AuditsResponse>, ApiError> {
    let entries = depot
        .state()?
        .app
        .reports
        .audits()
        .await
        .map_err(into_api_error)?;

    Ok(Json(AuditsResponse {
        success: true,
        data: entries.into_iter().map(Into::into).collect(),
    }))
}
