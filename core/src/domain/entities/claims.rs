//! Claim set for issued access tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Access token lifetime in seconds (fixed, not configurable).
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Claims structure for the JWT payload.
///
/// Field order is the serialization order; the claim set is deliberately
/// minimal: subject, role list, issued-at and expiration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (authenticated client identifier)
    pub sub: String,

    /// Roles granted to the client
    pub roles: Vec<String>,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp, always `iat + TOKEN_TTL_SECONDS`
    pub exp: i64,
}

impl TokenClaims {
    /// Creates a new claim set for an access token.
    ///
    /// # Arguments
    ///
    /// * `subject` - The authenticated client identifier
    /// * `roles` - Role strings to embed in the `roles` claim
    pub fn new(subject: &str, roles: Vec<String>) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: subject.to_string(),
            roles,
            iat: now,
            exp: now + TOKEN_TTL_SECONDS,
        }
    }

    /// Checks whether the claims have expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
