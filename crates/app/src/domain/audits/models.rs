//! Audit Models

use std::fmt;

use jiff::Timestamp;
use serde_json::Value;
use uuid::Uuid;

use crate::{domain::accounts::models::UserUuid, uuids::TypedUuid};

/// Audit Entry UUID
pub type AuditUuid = TypedUuid<AuditEntry>;

/// Something worth recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    UserRegistered,
    UserLogin,
    OrderCreated,
}

impl AuditAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserRegistered => "user_registered",
            Self::UserLogin => "user_login",
            Self::OrderCreated => "order_created",
        }
    }

    /// The kind of entity this action is about.
    pub const fn entity_type(self) -> &'static str {
        match self {
            Self::UserRegistered | Self::UserLogin => "user",
            Self::OrderCreated => "order",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit Entry Model
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub uuid: AuditUuid,
    pub user_uuid: Option<UserUuid>,
    pub entity_type: String,
    pub entity_uuid: Uuid,
    pub action: String,
    pub detail: Value,
    pub created_at: Timestamp,
}

/// New Audit Entry
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewAuditEntry {
    pub user: UserUuid,
    pub entity: Uuid,
    pub action: AuditAction,
    pub detail: Value,
}
