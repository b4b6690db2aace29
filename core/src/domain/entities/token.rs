//! Session token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// Session token lifetime (24 hours)
pub const SESSION_TOKEN_TTL_HOURS: i64 = 24;

/// Claims structure for the session token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user_id` expiring `ttl` after now
    pub fn new(user_id: i64, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Parses the user identifier out of the subject claim
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub.parse().map_err(|_| TokenError::InvalidClaims)
    }

    /// Checks if the claims are past their expiry
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_expire_after_ttl() {
        let claims = Claims::new(42, Duration::hours(SESSION_TOKEN_TTL_HOURS));
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert_eq!(claims.user_id().unwrap(), 42);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_non_numeric_subject_is_rejected() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(matches!(claims.user_id(), Err(TokenError::InvalidClaims)));
        assert!(claims.is_expired());
    }
}
