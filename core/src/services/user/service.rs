//! User profile and administration service

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use ps_shared::config::AuthConfig;
use ps_shared::utils::validation::{is_valid_email, length_between, normalize_email};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

/// Minimum username length in characters
pub const USERNAME_MIN_LEN: usize = 2;

/// Maximum username length in characters
pub const USERNAME_MAX_LEN: usize = 255;

/// Check a chosen username against the length bounds and the owner's email.
///
/// An email-shaped username must equal the account's own normalized email,
/// since registration without a username stores the email as the username.
pub fn validate_username(username: &str, email: &str) -> Result<(), ValidationError> {
    if !length_between(username, USERNAME_MIN_LEN, USERNAME_MAX_LEN) {
        return Err(ValidationError::InvalidLength {
            field: "username".to_string(),
            min: USERNAME_MIN_LEN,
            max: USERNAME_MAX_LEN,
        });
    }
    if is_valid_email(username) && normalize_email(username) != email {
        return Err(ValidationError::ForeignEmailUsername);
    }
    Ok(())
}

/// Profile access for the authenticated user and admin-only account management
pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
    /// Upper bound for each administrative operation
    admin_timeout: Duration,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `config` - Authentication configuration (administrative timeout)
    pub fn new(user_repository: Arc<U>, config: &AuthConfig) -> Self {
        Self {
            user_repository,
            admin_timeout: Duration::from_secs(config.admin_timeout_secs),
        }
    }

    /// Override the administrative timeout
    pub fn with_admin_timeout(mut self, timeout: Duration) -> Self {
        self.admin_timeout = timeout;
        self
    }

    /// Profile of a non-deleted user
    pub async fn profile(&self, user_id: i64) -> DomainResult<User> {
        self.user_repository.find_by_id(user_id).await
    }

    /// Replace username and email of a user
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The updated profile
    /// * `Err(DomainError::ValidationErr)` - Bad username or malformed email
    /// * `Err(DomainError::NotFound)` - No such user
    /// * `Err(DomainError::Conflict)` - Username or email taken by another user
    pub async fn update_profile(
        &self,
        user_id: i64,
        username: &str,
        email: &str,
    ) -> DomainResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        validate_username(username, &email)?;

        let user = self
            .user_repository
            .update_profile(user_id, username, &email)
            .await?;
        tracing::info!(user_id = %user_id, "Profile updated");
        Ok(user)
    }

    /// List every non-deleted user. Requires an admin requester.
    pub async fn list_users(&self, requester_id: i64) -> DomainResult<Vec<User>> {
        self.with_timeout("list users", async {
            self.require_admin(requester_id).await?;
            self.user_repository.list_all().await
        })
        .await
    }

    /// Soft-delete a user. Requires an admin requester.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The user was marked deleted
    /// * `Err(DomainError::NotFound)` - No such non-deleted user
    /// * `Err(AuthError::InsufficientPermissions)` - Requester is not an admin
    pub async fn delete_user(&self, requester_id: i64, user_id: i64) -> DomainResult<()> {
        self.with_timeout("delete user", async {
            self.require_admin(requester_id).await?;
            if !self.user_repository.soft_delete(user_id).await? {
                return Err(DomainError::not_found("user"));
            }
            tracing::info!(user_id = %user_id, admin_id = %requester_id, "User deleted");
            Ok(())
        })
        .await
    }

    async fn require_admin(&self, requester_id: i64) -> DomainResult<User> {
        let requester = self.user_repository.find_by_id(requester_id).await?;
        if !requester.is_admin() {
            tracing::warn!(user_id = %requester_id, "Administrative operation denied");
            return Err(AuthError::InsufficientPermissions.into());
        }
        Ok(requester)
    }

    /// Abandon `operation` once the administrative timeout elapses
    async fn with_timeout<T, F>(&self, operation: &str, future: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        match tokio::time::timeout(self.admin_timeout, future).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout_ms = self.admin_timeout.as_millis() as u64,
                    "Administrative operation timed out"
                );
                Err(DomainError::Timeout {
                    operation: operation.to_string(),
                })
            }
        }
    }
}
