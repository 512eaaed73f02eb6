//! Listener accounts

use crate::error::{ChainError, Result};
use crate::validation::validate_wallet_address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// A registered listener
///
/// The password is stored but never serialized, so any response built from
/// a `User` leaves it out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub wallet_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub wallet_address: Option<String>,
}

impl CreateUser {
    /// Username, password and email must be present; a wallet address, when
    /// given, must be well formed
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("username", &self.username),
            ("password", &self.password),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(ChainError::invalid_input(format!("{name} cannot be empty")));
            }
        }

        if !self.email.contains('@') {
            return Err(ChainError::invalid_input("email must contain '@'"));
        }

        if let Some(address) = &self.wallet_address {
            validate_wallet_address(address)?;
        }

        Ok(())
    }

    /// Build the stored record once an id has been assigned
    pub fn into_user(self, id: UserId, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            email: self.email,
            wallet_address: self.wallet_address,
            created_at,
        }
    }
}
