//! `POST /oauth/token` handler.

use actix_web::{web, HttpResponse};

use tm_core::errors::{AuthenticationError, ValidationError};
use tm_core::services::auth::CredentialValidator;

use crate::dto::{TokenRequest, TokenResponse};
use crate::handlers::ApiError;
use crate::middleware::BasicCredentials;
use crate::routes::oauth::AppState;

/// Issues an access token for the client-credentials grant.
///
/// The client must present valid Basic credentials and request the
/// `client_credentials` grant type. Credentials are checked before the
/// grant type, so a request that fails both gets a 401.
pub async fn issue_token<V: CredentialValidator + 'static>(
    credentials: BasicCredentials,
    state: web::Data<AppState<V>>,
    form: web::Form<TokenRequest>,
) -> Result<HttpResponse, ApiError> {
    if !state
        .credential_validator
        .authenticate(&credentials.client_id, &credentials.client_secret)
    {
        return Err(AuthenticationError::InvalidCredentials.into());
    }

    if form.grant_type != "client_credentials" {
        return Err(ValidationError::UnsupportedGrantType {
            grant_type: form.grant_type.clone(),
        }
        .into());
    }

    let access_token = state.token_service.generate_token(&credentials.client_id)?;
    Ok(HttpResponse::Ok().json(TokenResponse::bearer(access_token)))
}
