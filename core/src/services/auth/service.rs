//! Main authentication service implementation

use std::sync::Arc;

use ps_shared::config::AuthConfig;
use ps_shared::utils::validation::{is_valid_email, normalize_email};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;
use crate::services::user::validate_username;

use super::password::PasswordHasher;

/// Minimum accepted password length
pub const PASSWORD_MIN_LEN: usize = 6;

/// Upper bound keeps bcrypt's 72 byte input limit from silently truncating
pub const PASSWORD_MAX_LEN: usize = 72;

/// Authentication service for registration, login and password changes
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for session tokens
    token_service: Arc<TokenService>,
    /// bcrypt hasher with the configured cost
    hasher: PasswordHasher,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service issuing session tokens
    /// * `config` - Authentication configuration (bcrypt cost)
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            hasher: PasswordHasher::new(config.bcrypt_cost),
        }
    }

    /// Register a new user
    ///
    /// The username is optional; when absent the email address is used so the
    /// unique, non-empty username invariant still holds. A chosen username
    /// that looks like an email must be the registrant's own address.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Conflict)` - Email or username already registered
    /// * `Err(DomainError::ValidationErr)` - Malformed email, username or password
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
    ) -> DomainResult<User> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        validate_password("password", password)?;

        let username = match username.map(str::trim) {
            Some(name) if !name.is_empty() => {
                validate_username(name, &email)?;
                name.to_string()
            }
            _ => email.clone(),
        };

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .user_repository
            .create(User::new(username, email, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Log a user in and issue a session token
    ///
    /// Unknown email, soft-deleted account and wrong password all fail with
    /// the same `AuthError::InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        let email = normalize_email(email);

        let user = match self.user_repository.find_by_email(&email).await {
            Ok(user) => user,
            Err(DomainError::NotFound { .. }) => {
                tracing::debug!("Login rejected: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        if !self.hasher.verify(password, &user.password_hash) {
            tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(user.id)?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(token)
    }

    /// Change the password of an existing user
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The new hash replaced the old one
    /// * `Err(DomainError::NotFound)` - No such user
    /// * `Err(AuthError::InvalidCredentials)` - Old password does not match
    pub async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        validate_password("new_password", new_password)?;

        let user = self.user_repository.find_by_id(user_id).await?;
        if !self.hasher.verify(old_password, &user.password_hash) {
            tracing::info!(user_id = %user_id, "Password change rejected: old password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_hash = self.hasher.hash(new_password)?;
        self.user_repository
            .update_password(user_id, &password_hash)
            .await?;

        tracing::info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}

fn validate_password(field: &str, password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    // Max is checked in bytes, which is what bcrypt consumes
    if password.chars().count() < PASSWORD_MIN_LEN || password.len() > PASSWORD_MAX_LEN {
        return Err(ValidationError::InvalidLength {
            field: field.to_string(),
            min: PASSWORD_MIN_LEN,
            max: PASSWORD_MAX_LEN,
        });
    }
    Ok(())
}
