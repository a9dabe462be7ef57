//! Address response bodies.

use pharmacy_app::domain::addresses::models::Address;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddressResponse {
    pub id: Uuid,

    pub user_id: Uuid,

    pub label: Option<String>,

    pub line1: String,

    pub line2: Option<String>,

    pub city: Option<String>,

    pub state: Option<String>,

    pub postal_code: Option<String>,

    pub country: Option<String>,

    pub phone: Option<String>,

    pub is_default: bool,

    pub created_at: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.uuid.into_uuid(),
            user_id: address.user_uuid.into_uuid(),
            label: address.label,
            line1: address.line1,
            line2: address.line2,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
            phone: address.phone,
            is_default: address.is_default,
            created_at: address.created_at.to_string(),
        }
    }
}
