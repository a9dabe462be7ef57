//! Address Models

use jiff::Timestamp;

use crate::{domain::accounts::models::UserUuid, uuids::TypedUuid};

use super::errors::AddressesServiceError;

/// Address UUID
pub type AddressUuid = TypedUuid<Address>;

/// Address Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub uuid: AddressUuid,
    pub user_uuid: UserUuid,
    pub label: Option<String>,
    pub line1: String,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,

    /// At most one address per user carries the flag.
    pub is_default: bool,
    pub created_at: Timestamp,
}

/// Address submission, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAddress {
    pub user_id: Option<String>,
    pub label: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub is_default: bool,
}

/// An address row to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AddressRecord {
    pub uuid: AddressUuid,
    pub user_uuid: UserUuid,
    pub label: Option<String>,
    pub line1: String,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub is_default: bool,
}

impl NewAddress {
    /// Require an owner and a first line, and parse the owner id.
    pub(crate) fn validate(self) -> Result<AddressRecord, AddressesServiceError> {
        let (Some(user_id), Some(line1)) = (
            self.user_id.filter(|value| !value.trim().is_empty()),
            self.line1.filter(|value| !value.trim().is_empty()),
        ) else {
            return Err(AddressesServiceError::MissingFields);
        };

        let user_uuid = UserUuid::parse(&user_id).ok_or(AddressesServiceError::InvalidUserId)?;

        Ok(AddressRecord {
            uuid: AddressUuid::new(),
            user_uuid,
            label: self.label,
            line1,
            line2: self.line2,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
            country: self.country,
            phone: self.phone,
            is_default: self.is_default,
        })
    }
}
