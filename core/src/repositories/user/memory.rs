//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

/// In-memory user repository
///
/// Soft-deleted rows keep their username and email reserved, matching the
/// unique indexes of the SQL schema.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, including soft-deleted ones
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn check_unique<'a>(
    mut others: impl Iterator<Item = &'a User>,
    username: &str,
    email: &str,
) -> Result<(), DomainError> {
    others.try_for_each(|u| {
        if u.email == email {
            Err(DomainError::Conflict {
                field: "email".to_string(),
            })
        } else if u.username == username {
            Err(DomainError::Conflict {
                field: "username".to_string(),
            })
        } else {
            Ok(())
        }
    })
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut state = self.state.write().await;

        check_unique(state.users.values(), &user.username, &user.email)?;

        state.last_id += 1;
        user.id = state.last_id;
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, DomainError> {
        let state = self.state.read().await;
        state
            .users
            .values()
            .find(|u| u.email == email && !u.is_deleted())
            .cloned()
            .ok_or_else(|| DomainError::not_found("user"))
    }

    async fn find_by_username(&self, username: &str) -> Result<User, DomainError> {
        let state = self.state.read().await;
        state
            .users
            .values()
            .find(|u| u.username == username && !u.is_deleted())
            .cloned()
            .ok_or_else(|| DomainError::not_found("user"))
    }

    async fn find_by_id(&self, id: i64) -> Result<User, DomainError> {
        let state = self.state.read().await;
        state
            .users
            .get(&id)
            .filter(|u| !u.is_deleted())
            .cloned()
            .ok_or_else(|| DomainError::not_found("user"))
    }

    async fn update_profile(
        &self,
        id: i64,
        username: &str,
        email: &str,
    ) -> Result<User, DomainError> {
        let mut state = self.state.write().await;

        if !state.users.get(&id).is_some_and(|u| !u.is_deleted()) {
            return Err(DomainError::not_found("user"));
        }
        check_unique(
            state.users.values().filter(|u| u.id != id),
            username,
            email,
        )?;

        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("user"))?;
        user.update_profile(username.to_string(), email.to_string());
        Ok(user.clone())
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .get_mut(&id)
            .filter(|u| !u.is_deleted())
            .ok_or_else(|| DomainError::not_found("user"))?;
        user.set_password_hash(password_hash.to_string());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .filter(|u| !u.is_deleted())
            .cloned()
            .collect())
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.users.get_mut(&id) {
            Some(user) if !user.is_deleted() => {
                user.deleted_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
