use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Server-assigned user identifier
pub type UserId = i64;

/// A stored user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Unique, case-sensitive login name
    pub username: String,
    /// Salted argon2 hash, never the plaintext password
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub gender: String,
    /// Role label, e.g. "Admin" or "User"
    pub role: String,
}

impl User {
    /// Public view of the account, safe to return to clients
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

/// A registration request, before hashing and id assignment
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub gender: String,
    pub role: String,
}

impl NewUser {
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Store-level input for a new account: hashed credentials, no id yet
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password_hash: String,
    pub gender: String,
    pub role: String,
}

impl UserRecord {
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            password_hash: self.password_hash,
            gender: self.gender,
            role: self.role,
        }
    }
}

/// Authenticated identity handed to the session issuer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
    pub role: String,
}
