//! `GET /oauth/public-key` handler.

use actix_web::{web, HttpResponse};

use tm_core::services::auth::CredentialValidator;

use crate::routes::oauth::AppState;

/// Serves the signing certificate as PEM text.
///
/// Requires no authentication; the certificate is public material.
pub async fn public_key<V: CredentialValidator + 'static>(
    state: web::Data<AppState<V>>,
) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(state.public_key_exporter.export_pem())
}
