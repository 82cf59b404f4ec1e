//! Mapping from domain errors to HTTP responses.
//!
//! Every endpoint returns `Result<_, ApiError>`; this module decides the
//! status code and the stable reason code carried in the JSON body.
//! Internal failures are logged in full and answered with a generic body so
//! key or configuration details never reach a client.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use tm_core::errors::{AuthenticationError, DomainError, ValidationError};

use crate::dto::ErrorResponse;

/// Wrapper turning a [`DomainError`] into an actix-web response.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<AuthenticationError> for ApiError {
    fn from(error: AuthenticationError) -> Self {
        Self(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self(error.into())
    }
}

impl ApiError {
    /// Stable machine-readable reason code for the client.
    fn reason_code(&self) -> &'static str {
        match &self.0 {
            DomainError::Authentication(AuthenticationError::MissingAuthorizationHeader) => {
                "missing_authorization_header"
            }
            DomainError::Authentication(AuthenticationError::InvalidCredentialsFormat) => {
                "invalid_credentials_format"
            }
            DomainError::Authentication(AuthenticationError::InvalidCredentials) => {
                "invalid_credentials"
            }
            DomainError::Validation(ValidationError::UnsupportedGrantType { .. }) => {
                "unsupported_grant_type"
            }
            _ => "internal_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Authentication(_) => StatusCode::UNAUTHORIZED,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Configuration(_) | DomainError::KeyAccess(_) | DomainError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Full detail goes to the log only; the client gets a generic body.
            log::error!("Internal error while handling request: {}", self.0);
            return HttpResponse::build(status).json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ));
        }

        HttpResponse::build(status)
            .json(ErrorResponse::new(self.reason_code(), self.0.to_string()))
    }
}
