//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Development-only signing secret; production refuses to start with it.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Session tokens expire this many hours after issuance.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// bcrypt work factor used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Upper bound for administrative store calls, in seconds.
pub const DEFAULT_ADMIN_TIMEOUT_SECS: u64 = 3;

/// Session token and password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify session tokens
    pub jwt_secret: String,

    /// Session token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,

    /// bcrypt cost factor (4..=31)
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Timeout for administrative listing and deletion
    #[serde(default = "default_admin_timeout_secs")]
    pub admin_timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            admin_timeout_secs: DEFAULT_ADMIN_TIMEOUT_SECS,
        }
    }
}

impl AuthConfig {
    /// Create a new auth configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let token_ttl_hours = std::env::var("JWT_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|hours: &i64| *hours > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_HOURS);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|cost: &u32| (4..=31).contains(cost))
            .unwrap_or(DEFAULT_BCRYPT_COST);
        let admin_timeout_secs = std::env::var("ADMIN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(DEFAULT_ADMIN_TIMEOUT_SECS);

        Self {
            jwt_secret,
            token_ttl_hours,
            bcrypt_cost,
            admin_timeout_secs,
        }
    }

    /// Set the bcrypt cost factor
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Set the administrative timeout in seconds
    pub fn with_admin_timeout_secs(mut self, secs: u64) -> Self {
        self.admin_timeout_secs = secs;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn default_token_ttl_hours() -> i64 {
    DEFAULT_TOKEN_TTL_HOURS
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}

fn default_admin_timeout_secs() -> u64 {
    DEFAULT_ADMIN_TIMEOUT_SECS
}
