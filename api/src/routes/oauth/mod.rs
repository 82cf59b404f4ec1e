//! OAuth2 endpoints.
//!
//! `POST /oauth/token` issues an access token for the client-credentials
//! grant; `GET /oauth/public-key` serves the verification certificate as PEM.

pub mod public_key;
pub mod token;

use std::sync::Arc;

use tm_core::services::auth::CredentialValidator;
use tm_core::services::token::{PublicKeyExporter, TokenService};

/// Shared application state injected into every handler.
///
/// Generic over the credential validator so tests can swap in alternative
/// implementations without touching the handlers.
pub struct AppState<V: CredentialValidator> {
    pub token_service: Arc<TokenService>,
    pub public_key_exporter: Arc<PublicKeyExporter>,
    pub credential_validator: Arc<V>,
}
