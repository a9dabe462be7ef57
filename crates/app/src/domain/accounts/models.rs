//! Account Models

use jiff::Timestamp;

use crate::{domain::accounts::errors::AccountsServiceError, uuids::TypedUuid};

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// Role every self-registered user gets.
pub const CUSTOMER_ROLE: &str = "customer";

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 6;

/// User Model
///
/// Never carries password material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uuid: UserUuid,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub is_verified: bool,
    pub created_at: Timestamp,
}

/// Registration request, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

/// A registration that passed validation. The email is lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidRegistration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl Registration {
    /// Check required fields, name length, email shape and password length, in that order.
    pub(crate) fn validate(self) -> Result<ValidRegistration, AccountsServiceError> {
        let (Some(name), Some(email), Some(password)) = (
            non_empty(self.name),
            non_empty(self.email),
            non_empty(self.password),
        ) else {
            return Err(AccountsServiceError::MissingFields);
        };

        if name.chars().count() < MIN_NAME_CHARS {
            return Err(AccountsServiceError::NameTooShort);
        }

        if !email.contains('@') {
            return Err(AccountsServiceError::InvalidEmail);
        }

        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AccountsServiceError::PasswordTooShort);
        }

        Ok(ValidRegistration {
            full_name: name,
            email: email.to_lowercase(),
            password,
            phone: non_empty(self.phone),
        })
    }
}

/// Login request, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// A user row to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub is_verified: bool,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, email: &str, password: &str) -> Registration {
        Registration {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            phone: None,
        }
    }

    #[test]
    fn valid_registration_lowercases_email() {
        let valid = registration("Demo User", "Demo@Example.com", "Demo123!").validate();

        assert!(
            matches!(&valid, Ok(valid) if valid.email == "demo@example.com"),
            "got {valid:?}"
        );
    }

    #[test]
    fn empty_fields_are_missing() {
        let result = registration("", "a@b.c", "secret1").validate();

        assert!(matches!(result, Err(AccountsServiceError::MissingFields)));
    }

    #[test]
    fn short_name_is_rejected() {
        let result = registration("A", "a@b.c", "secret1").validate();

        assert!(matches!(result, Err(AccountsServiceError::NameTooShort)));
    }

    #[test]
    fn email_without_at_is_rejected() {
        let result = registration("Ana", "ana.example.com", "secret1").validate();

        assert!(matches!(result, Err(AccountsServiceError::InvalidEmail)));
    }

    #[test]
    fn short_password_is_rejected() {
        let result = registration("Ana", "ana@example.com", "12345").validate();

        assert!(matches!(result, Err(AccountsServiceError::PasswordTooShort)));
    }

    #[test]
    fn blank_phone_is_dropped() {
        let valid = Registration {
            phone: Some(String::new()),
            ..registration("Ana", "ana@example.com", "secret1")
        }
        .validate();

        assert!(matches!(valid, Ok(valid) if valid.phone.is_none()));
    }
}
