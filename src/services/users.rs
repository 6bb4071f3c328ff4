use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::{Identity, NewUser, User, UserId, UserRecord},
    store::UserStore,
};

/// User directory: registration, credential checks, and account lookups
pub struct UserDirectory {
    users: Arc<dyn UserStore>,
}

impl UserDirectory {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Registers a new account. The username must be unused; the password
    /// is stored only as a salted argon2 hash.
    pub async fn register(&self, new_user: NewUser) -> AppResult<User> {
        new_user.validate()?;

        if !self.is_username_available(&new_user.username).await? {
            return Err(AppError::Conflict(format!(
                "username {} is already taken",
                new_user.username
            )));
        }

        let record = UserRecord {
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            username: new_user.username,
            password_hash: hash_password(&new_user.password)?,
            gender: new_user.gender,
            role: new_user.role,
        };

        let user = self.users.insert(record).await?;
        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Checks the credentials against the stored hash. Both failure modes
    /// (unknown username, wrong password) collapse into the same outcome.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Identity> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AppError::Unauthorized);
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::Unauthorized);
        }

        Ok(user.identity())
    }

    /// True iff no existing user carries this exact username
    pub async fn is_username_available(&self, username: &str) -> AppResult<bool> {
        Ok(self.users.find_by_username(username).await?.is_none())
    }

    pub async fn exists(&self, id: UserId) -> AppResult<bool> {
        Ok(self.users.find(id).await?.is_some())
    }
}

/// Hash a password with a fresh per-hash salt.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
