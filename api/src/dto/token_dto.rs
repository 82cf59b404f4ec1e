//! Request and response bodies for the token endpoint.

use serde::{Deserialize, Serialize};

use tm_core::domain::entities::claims::TOKEN_TTL_SECONDS;

/// Form body of `POST /oauth/token`.
///
/// The endpoint accepts `application/x-www-form-urlencoded` per RFC 6749;
/// `grant_type` is the only recognized field and anything other than
/// `client_credentials` is rejected.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Requested OAuth2 grant type
    pub grant_type: String,
}

/// Successful token issuance response.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed JWT in compact serialization
    pub access_token: String,
    /// Always `Bearer`
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl TokenResponse {
    /// Wraps a signed token in the standard Bearer envelope.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: TOKEN_TTL_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_response_serializes_with_standard_fields() {
        let response = TokenResponse::bearer("abc.def.ghi".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["access_token"], "abc.def.ghi");
        assert_eq!(json["token_type"], "Bearer");
        assert_eq!(json["expires_in"], 3600);
    }

    #[test]
    fn test_token_request_deserializes_from_form_field() {
        let request: TokenRequest =
            serde_urlencoded::from_str("grant_type=client_credentials").unwrap();
        assert_eq!(request.grant_type, "client_credentials");
    }
}
