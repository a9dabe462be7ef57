//! Accounts service.

use async_trait::async_trait;
use mockall::automock;
use serde_json::json;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        accounts::{
            errors::AccountsServiceError,
            models::{CUSTOMER_ROLE, Credentials, NewUser, Registration, User, UserUuid},
            passwords::{hash_password, verify_password},
            repository::PgAccountsRepository,
        },
        audits::{
            models::{AuditAction, NewAuditEntry},
            repository::PgAuditsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgAccountsService {
    db: Db,
    repository: PgAccountsRepository,
    audits: PgAuditsRepository,
}

impl PgAccountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAccountsRepository::new(),
            audits: PgAuditsRepository::new(),
        }
    }
}

#[async_trait]
impl AccountsService for PgAccountsService {
    async fn register(&self, registration: Registration) -> Result<User, AccountsServiceError> {
        let registration = registration.validate()?;
        let password_hash = hash_password(&registration.password)?;

        let mut tx = self.db.begin().await?;

        if self
            .repository
            .find_user_by_email(&mut tx, &registration.email)
            .await?
            .is_some()
        {
            return Err(AccountsServiceError::EmailTaken);
        }

        let user = self
            .repository
            .create_user(
                &mut tx,
                NewUser {
                    uuid: UserUuid::new(),
                    email: registration.email,
                    password_hash,
                    full_name: registration.full_name,
                    phone: registration.phone,
                    role: CUSTOMER_ROLE.to_string(),
                    is_verified: false,
                },
            )
            .await?;

        self.audits
            .record(
                &mut tx,
                NewAuditEntry {
                    user: user.uuid,
                    entity: user.uuid.into_uuid(),
                    action: AuditAction::UserRegistered,
                    detail: json!({ "email": user.email }),
                },
            )
            .await?;

        tx.commit().await?;

        info!(user = %user.uuid, "user registered");

        Ok(user)
    }

    async fn login(&self, credentials: Credentials) -> Result<User, AccountsServiceError> {
        let (Some(email), Some(password)) = (
            credentials.email.filter(|email| !email.is_empty()),
            credentials.password.filter(|password| !password.is_empty()),
        ) else {
            return Err(AccountsServiceError::MissingCredentials);
        };

        let mut tx = self.db.begin().await?;

        let Some(stored) = self
            .repository
            .find_credentials(&mut tx, &email.to_lowercase())
            .await?
        else {
            return Err(AccountsServiceError::InvalidCredentials);
        };

        if !verify_password(&password, &stored.password_hash)? {
            return Err(AccountsServiceError::InvalidCredentials);
        }

        self.audits
            .record(
                &mut tx,
                NewAuditEntry {
                    user: stored.user.uuid,
                    entity: stored.user.uuid.into_uuid(),
                    action: AuditAction::UserLogin,
                    detail: json!({ "email": stored.user.email }),
                },
            )
            .await?;

        tx.commit().await?;

        Ok(stored.user)
    }

    async fn get_profile(&self, user: UserUuid) -> Result<User, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Validate and create a customer account, recording a `user_registered` audit entry.
    async fn register(&self, registration: Registration) -> Result<User, AccountsServiceError>;

    /// Check an email/password pair, recording a `user_login` audit entry on success.
    async fn login(&self, credentials: Credentials) -> Result<User, AccountsServiceError>;

    /// Retrieve a single user.
    async fn get_profile(&self, user: UserUuid) -> Result<User, AccountsServiceError>;
}
