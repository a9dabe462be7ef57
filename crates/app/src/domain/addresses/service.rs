//! Addresses service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::models::UserUuid,
        addresses::{
            errors::AddressesServiceError,
            models::{Address, NewAddress},
            repository::PgAddressesRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgAddressesService {
    db: Db,
    repository: PgAddressesRepository,
}

impl PgAddressesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAddressesRepository::new(),
        }
    }
}

#[async_trait]
impl AddressesService for PgAddressesService {
    async fn list_addresses(&self, user: UserUuid) -> Result<Vec<Address>, AddressesServiceError> {
        let mut tx = self.db.begin().await?;

        let addresses = self.repository.list_addresses(&mut tx, user).await?;

        tx.commit().await?;

        Ok(addresses)
    }

    async fn add_address(&self, address: NewAddress) -> Result<Address, AddressesServiceError> {
        let record = address.validate()?;

        let mut tx = self.db.begin().await?;

        if record.is_default {
            self.repository
                .clear_default(&mut tx, record.user_uuid)
                .await?;
        }

        let address = self.repository.create_address(&mut tx, record).await?;

        tx.commit().await?;

        Ok(address)
    }
}

#[automock]
#[async_trait]
pub trait AddressesService: Send + Sync {
    /// A user's address book, default address first and then newest first.
    async fn list_addresses(&self, user: UserUuid) -> Result<Vec<Address>, AddressesServiceError>;

    /// Add an address. A new default address clears the flag on the user's other addresses.
    async fn add_address(&self, address: NewAddress) -> Result<Address, AddressesServiceError>;
}
