//! Unit tests for the user service

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ps_shared::config::AuthConfig;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::user::UserService;

fn config() -> AuthConfig {
    AuthConfig::new("test-secret").with_bcrypt_cost(4)
}

async fn seed(repo: &InMemoryUserRepository, name: &str, role: UserRole) -> User {
    repo.create(
        User::new(name.to_string(), format!("{}@example.com", name), "hash".to_string())
            .with_role(role),
    )
    .await
    .unwrap()
}

/// Delegates to the in-memory store after sleeping on listing
struct SlowUserRepository {
    inner: InMemoryUserRepository,
    delay: Duration,
}

#[async_trait]
impl UserRepository for SlowUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.inner.create(user).await
    }

    async fn find_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.inner.find_by_email(email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<User, DomainError> {
        self.inner.find_by_username(username).await
    }

    async fn find_by_id(&self, id: i64) -> Result<User, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn update_profile(
        &self,
        id: i64,
        username: &str,
        email: &str,
    ) -> Result<User, DomainError> {
        self.inner.update_profile(id, username, email).await
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), DomainError> {
        self.inner.update_password(id, password_hash).await
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_all().await
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        tokio::time::sleep(self.delay).await;
        self.inner.soft_delete(id).await
    }
}

#[tokio::test]
async fn test_profile_of_existing_and_deleted_user() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let alice = seed(&repo, "alice", UserRole::User).await;
    let service = UserService::new(repo.clone(), &config());

    assert_eq!(service.profile(alice.id).await.unwrap().username, "alice");

    repo.soft_delete(alice.id).await.unwrap();
    assert!(service.profile(alice.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_profile_validates_and_persists() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let alice = seed(&repo, "alice", UserRole::User).await;
    seed(&repo, "bob", UserRole::User).await;
    let service = UserService::new(repo.clone(), &config());

    let updated = service
        .update_profile(alice.id, "alicia", "Alicia@Example.com")
        .await
        .unwrap();
    assert_eq!(updated.username, "alicia");
    assert_eq!(updated.email, "alicia@example.com");

    let err = service.update_profile(alice.id, "  ", "a@b.com").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { .. })
    ));

    let err = service.update_profile(alice.id, "alicia", "nope").await.unwrap_err();
    assert_eq!(err, DomainError::ValidationErr(ValidationError::InvalidEmail));

    let err = service
        .update_profile(alice.id, "bob", "alicia@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
}

#[tokio::test]
async fn test_update_profile_username_rules_match_registration() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let alice = seed(&repo, "alice", UserRole::User).await;
    let service = UserService::new(repo.clone(), &config());

    let err = service
        .update_profile(alice.id, "stranger@x.com", "alice@x.com")
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::ValidationErr(ValidationError::ForeignEmailUsername));

    let err = service.update_profile(alice.id, "a", "alice@x.com").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidLength { min: 2, .. })
    ));

    let updated = service
        .update_profile(alice.id, "alice@x.com", "Alice@X.com")
        .await
        .unwrap();
    assert_eq!(updated.username, "alice@x.com");
}

#[tokio::test]
async fn test_admin_can_list_and_delete() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let admin = seed(&repo, "admin", UserRole::Admin).await;
    let alice = seed(&repo, "alice", UserRole::User).await;
    let service = UserService::new(repo.clone(), &config());

    assert_eq!(service.list_users(admin.id).await.unwrap().len(), 2);

    service.delete_user(admin.id, alice.id).await.unwrap();
    let users = service.list_users(admin.id).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, admin.id);

    let err = service.delete_user(admin.id, alice.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_non_admin_is_rejected() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let alice = seed(&repo, "alice", UserRole::User).await;
    let bob = seed(&repo, "bob", UserRole::User).await;
    let service = UserService::new(repo.clone(), &config());

    let expected = DomainError::Auth(AuthError::InsufficientPermissions);
    assert_eq!(service.list_users(alice.id).await.unwrap_err(), expected);
    assert_eq!(service.delete_user(alice.id, bob.id).await.unwrap_err(), expected);
    assert!(repo.find_by_id(bob.id).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_slow_admin_operations_time_out() {
    let inner = InMemoryUserRepository::new();
    let admin = seed(&inner, "admin", UserRole::Admin).await;
    let repo = Arc::new(SlowUserRepository {
        inner,
        delay: Duration::from_secs(10),
    });
    let service = UserService::new(repo, &config()).with_admin_timeout(Duration::from_secs(3));

    let err = service.list_users(admin.id).await.unwrap_err();
    assert_eq!(
        err,
        DomainError::Timeout {
            operation: "list users".to_string()
        }
    );

    let err = service.delete_user(admin.id, admin.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Timeout { .. }));
}
