//! Registration and login service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::{LoginRequest, RegisterRequest, User},
    repository::Repository,
};

pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new account.
    ///
    /// The existence check and the insert are two separate round-trips, so two
    /// concurrent registrations for the same email can both succeed.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<()> {
        if self
            .repository
            .users
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            tracing::warn!("Registration rejected: email already registered");
            return Err(AppError::Conflict(EMAIL_ALREADY_REGISTERED.to_string()));
        }

        let user = User {
            id: None,
            name: request.name,
            email: request.email,
            password: hash_password(&request.password)?,
        };
        let id = self.repository.users.insert(&user).await?;

        tracing::info!("Registered user {}", id);
        Ok(())
    }

    /// Check credentials. Nothing is issued on success.
    pub async fn login(&self, request: LoginRequest) -> AppResult<()> {
        let user = self
            .repository
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&user.password, &request.password) {
            tracing::warn!("Login failed for user {:?}", user.id);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        tracing::info!("Login succeeded for user {:?}", user.id);
        Ok(())
    }
}

/// Hash a password using Argon2 with a random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string.
///
/// Hashes that are not Argon2 PHC strings (bcrypt `$2b$...` records written
/// by earlier deployments, empty fields) never match.
pub fn verify_password(hash: &str, password: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash is not a readable PHC string: {}", e);
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
