//! MySQL implementation of the UserRepository trait.
//!
//! Soft-deleted rows are filtered with `deleted_at IS NULL` on every read and
//! write; their unique keys stay reserved by the table's indexes.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::{MySqlPool, Row};

use ps_core::domain::entities::user::{User, UserRole};
use ps_core::errors::DomainError;
use ps_core::repositories::UserRepository;

use super::{db_now, map_read_error, map_write_error};

const USER_COLUMNS: &str =
    "id, username, email, password_hash, role, created_at, updated_at, deleted_at";

const UNIQUE_FIELDS: &[&str] = &["email", "username"];

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::database(format!("Failed to get role: {}", e)))?;

        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::database(format!("Failed to get username: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::database(format!("Failed to get password_hash: {}", e)))?,
            role: role
                .parse::<UserRole>()
                .map_err(DomainError::database)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
            deleted_at: row
                .try_get::<Option<DateTime<Utc>>, _>("deleted_at")
                .map_err(|e| DomainError::database(format!("Failed to get deleted_at: {}", e)))?,
        })
    }

    /// Fetch one live user matching `column = value`
    async fn find_one<T>(&self, column: &str, value: T) -> Result<User, DomainError>
    where
        T: for<'q> sqlx::Encode<'q, sqlx::MySql> + sqlx::Type<sqlx::MySql> + Send,
    {
        let query = format!(
            "SELECT {} FROM users WHERE {} = ? AND deleted_at IS NULL LIMIT 1",
            USER_COLUMNS, column
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        match row {
            Some(row) => Self::row_to_user(&row),
            None => Err(DomainError::not_found("user")),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        user.created_at = user.created_at.trunc_subsecs(3);
        user.updated_at = user.updated_at.trunc_subsecs(3);

        let query = r#"
            INSERT INTO users (
                username, email, password_hash, role, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, UNIQUE_FIELDS, "Failed to create user"))?;

        user.id = result.last_insert_id() as i64;
        user.deleted_at = None;
        tracing::debug!(user_id = %user.id, "User row inserted");
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<User, DomainError> {
        self.find_one("username", username).await
    }

    async fn find_by_id(&self, id: i64) -> Result<User, DomainError> {
        self.find_one("id", id).await
    }

    async fn update_profile(
        &self,
        id: i64,
        username: &str,
        email: &str,
    ) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                username = ?,
                email = ?,
                updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .bind(email)
            .bind(db_now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, UNIQUE_FIELDS, "Failed to update user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user"));
        }

        self.find_by_id(id).await
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), DomainError> {
        let query = r#"
            UPDATE users SET password_hash = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(db_now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &[], "Failed to update password"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user"));
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE deleted_at IS NULL ORDER BY id",
            USER_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let now = db_now();
        let result = sqlx::query(
            "UPDATE users SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &[], "Failed to delete user"))?;

        Ok(result.rows_affected() > 0)
    }
}
