//! User repository trait defining the interface for user data persistence.
//!
//! Every fetch treats soft-deleted rows as absent and reports absence as
//! `DomainError::NotFound`, never as `Ok(None)`.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual storage while the services stay
/// storage-agnostic.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use ps_core::repositories::UserRepository;
/// use ps_core::domain::entities::user::User;
/// use ps_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<User, DomainError> {
///         // Implementation here
///         Err(DomainError::not_found("user"))
///     }
///
///     // ... other methods
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn find_by_username(&self, _: &str) -> Result<User, DomainError> { unimplemented!() }
/// #   async fn find_by_id(&self, _: i64) -> Result<User, DomainError> { unimplemented!() }
/// #   async fn update_profile(&self, _: i64, _: &str, _: &str) -> Result<User, DomainError> { unimplemented!() }
/// #   async fn update_password(&self, _: i64, _: &str) -> Result<(), DomainError> { unimplemented!() }
/// #   async fn list_all(&self) -> Result<Vec<User>, DomainError> { unimplemented!() }
/// #   async fn soft_delete(&self, _: i64) -> Result<bool, DomainError> { unimplemented!() }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// # Arguments
    /// * `user` - The user to persist; its `id` is ignored and assigned by the store
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user with its assigned identifier
    /// * `Err(DomainError::Conflict)` - Username or email already taken
    /// * `Err(DomainError)` - Database or other error occurred
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a non-deleted user by email
    async fn find_by_email(&self, email: &str) -> Result<User, DomainError>;

    /// Find a non-deleted user by username
    async fn find_by_username(&self, username: &str) -> Result<User, DomainError>;

    /// Find a non-deleted user by identifier
    async fn find_by_id(&self, id: i64) -> Result<User, DomainError>;

    /// Overwrite username and email of an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No such non-deleted user
    /// * `Err(DomainError::Conflict)` - The new values collide with another user
    async fn update_profile(
        &self,
        id: i64,
        username: &str,
        email: &str,
    ) -> Result<User, DomainError>;

    /// Replace the stored password hash of an existing user
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), DomainError>;

    /// List every non-deleted user ordered by identifier
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Mark a user as deleted
    ///
    /// # Returns
    /// * `Ok(true)` - The user was marked
    /// * `Ok(false)` - No such non-deleted user
    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError>;
}
