//! Addresses Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    accounts::models::UserUuid,
    addresses::models::{Address, AddressRecord, AddressUuid},
};

const LIST_ADDRESSES_SQL: &str = include_str!("sql/list_addresses.sql");
const CLEAR_DEFAULT_ADDRESSES_SQL: &str = include_str!("sql/clear_default_addresses.sql");
const INSERT_ADDRESS_SQL: &str = include_str!("sql/insert_address.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAddressesRepository;

impl PgAddressesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_addresses(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<Address>, sqlx::Error> {
        query_as::<Postgres, Address>(LIST_ADDRESSES_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn clear_default(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let result = query(CLEAR_DEFAULT_ADDRESSES_SQL)
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    pub(crate) async fn create_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        address: AddressRecord,
    ) -> Result<Address, sqlx::Error> {
        query_as::<Postgres, Address>(INSERT_ADDRESS_SQL)
            .bind(address.uuid.into_uuid())
            .bind(address.user_uuid.into_uuid())
            .bind(address.label)
            .bind(address.line1)
            .bind(address.line2)
            .bind(address.city)
            .bind(address.state)
            .bind(address.postal_code)
            .bind(address.country)
            .bind(address.phone)
            .bind(address.is_default)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Address {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AddressUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            label: row.try_get("label")?,
            line1: row.try_get("line1")?,
            line2: row.try_get("line2")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            postal_code: row.try_get("postal_code")?,
            country: row.try_get("country")?,
            phone: row.try_get("phone")?,
            is_default: row.try_get("is_default")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
