//! MySQL implementations of the core repository traits

mod product_repository_impl;
mod user_repository_impl;

pub use product_repository_impl::MySqlProductRepository;
pub use user_repository_impl::MySqlUserRepository;

use chrono::{DateTime, SubsecRound, Utc};
use ps_core::errors::DomainError;

/// Current time at the millisecond precision of the `DATETIME(3)` columns
pub(crate) fn db_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Translate a write error, turning unique-key violations into `Conflict`.
pub(crate) fn map_write_error(error: sqlx::Error, fields: &[&str], context: &str) -> DomainError {
    if let Some(db_error) = error.as_database_error() {
        if db_error.is_unique_violation() {
            let field = conflicting_field(db_error.message(), fields);
            tracing::debug!(field, "Unique constraint violated");
            return DomainError::Conflict {
                field: field.to_string(),
            };
        }
    }
    tracing::error!(error = %error, "{}", context);
    DomainError::database(format!("{}: {}", context, error))
}

/// Pick the field whose unique key MySQL reports as violated.
///
/// Only the key name ("Duplicate entry 'x' for key 'users.uq_users_email'")
/// is searched; the duplicated value may itself contain a field name.
pub(crate) fn conflicting_field<'a>(message: &str, fields: &[&'a str]) -> &'a str {
    let key = message
        .rsplit_once("for key '")
        .map(|(_, key)| key.trim_end_matches('\''))
        .unwrap_or("");
    let key = key.rsplit('.').next().unwrap_or(key);

    fields
        .iter()
        .find(|field| key.ends_with(&format!("_{}", field)))
        .or_else(|| fields.first())
        .copied()
        .unwrap_or("unknown")
}

/// Translate a read error
pub(crate) fn map_read_error(error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, "Database query failed");
    DomainError::database(format!("Database query failed: {}", error))
}
