//! Extractor for HTTP Basic credentials.
//!
//! The token endpoint authenticates clients with an
//! `Authorization: Basic base64(client_id:client_secret)` header. This
//! extractor parses that header and rejects malformed input before the
//! handler runs.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use tm_core::errors::AuthenticationError;

use crate::handlers::ApiError;

/// Client id and secret taken from a Basic `Authorization` header.
///
/// The secret is plaintext here by necessity; it is compared against a
/// bcrypt hash and never logged or echoed back.
pub struct BasicCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl BasicCredentials {
    fn parse(req: &HttpRequest) -> Result<Self, AuthenticationError> {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .ok_or(AuthenticationError::MissingAuthorizationHeader)?;

        // A non-Basic scheme counts as absent, matching the usual server
        // behaviour of ignoring schemes it does not speak.
        let encoded = header
            .to_str()
            .map_err(|_| AuthenticationError::InvalidCredentialsFormat)?
            .strip_prefix("Basic ")
            .ok_or(AuthenticationError::MissingAuthorizationHeader)?;

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthenticationError::InvalidCredentialsFormat)?;
        let decoded = String::from_utf8(decoded)
            .map_err(|_| AuthenticationError::InvalidCredentialsFormat)?;

        let (client_id, client_secret) = decoded
            .split_once(':')
            .ok_or(AuthenticationError::InvalidCredentialsFormat)?;

        Ok(Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        })
    }
}

impl FromRequest for BasicCredentials {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::parse(req).map_err(ApiError::from))
    }
}
