//! Audits Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};
use uuid::Uuid;

use crate::domain::{
    accounts::models::UserUuid,
    audits::models::{AuditEntry, AuditUuid, NewAuditEntry},
};

const INSERT_AUDIT_SQL: &str = include_str!("sql/insert_audit.sql");
const LIST_AUDITS_SQL: &str = include_str!("sql/list_audits.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAuditsRepository;

impl PgAuditsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn record(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entry: NewAuditEntry,
    ) -> Result<AuditUuid, sqlx::Error> {
        let uuid = AuditUuid::new();

        query(INSERT_AUDIT_SQL)
            .bind(uuid.into_uuid())
            .bind(entry.user.into_uuid())
            .bind(entry.action.entity_type())
            .bind(entry.entity)
            .bind(entry.action.as_str())
            .bind(Json(entry.detail))
            .execute(&mut **tx)
            .await?;

        Ok(uuid)
    }

    pub(crate) async fn list_audits(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<AuditEntry>, sqlx::Error> {
        query_as::<Postgres, AuditEntry>(LIST_AUDITS_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AuditEntry {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AuditUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: row
                .try_get::<Option<Uuid>, _>("user_uuid")?
                .map(UserUuid::from_uuid),
            entity_type: row.try_get("entity_type")?,
            entity_uuid: row.try_get("entity_uuid")?,
            action: row.try_get("action")?,
            detail: row.try_get::<Json<serde_json::Value>, _>("detail")?.0,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
