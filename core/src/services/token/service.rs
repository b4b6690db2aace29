//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use ps_shared::config::AuthConfig;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// Issues and verifies HS256 session tokens
///
/// The signing secret is injected at construction; there is no process-wide key.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Creates a new token service
    ///
    /// # Arguments
    ///
    /// * `secret` - Symmetric signing secret
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        // Only HS256 is accepted; tokens signed with any other algorithm fail.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256];
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Creates a token service from the authentication configuration
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, Duration::hours(config.token_ttl_hours))
    }

    /// Lifetime of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a session token for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's identifier
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token, expiring `ttl` from now
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, user_id: i64) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, self.ttl);
        self.encode_claims(&claims)
    }

    /// Verifies a session token
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is expired, mis-signed, uses another algorithm, or is malformed
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::InvalidAlgorithm => TokenError::InvalidAlgorithm,
                    ErrorKind::MissingRequiredClaim(_) | ErrorKind::Json(_) => {
                        TokenError::InvalidClaims
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(error)
            })?;

        Ok(token_data.claims)
    }

    /// Verifies a session token and returns the user identifier it carries
    pub fn authenticate(&self, token: &str) -> Result<i64, DomainError> {
        let claims = self.verify(token)?;
        Ok(claims.user_id()?)
    }

    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign session token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }
}
