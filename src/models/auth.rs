//! Authentication-related types.

use serde::{Deserialize, Serialize};
use url::Url;

/// A Google service-account key, as downloaded from the Cloud console.
///
/// Immutable once loaded; held for the lifetime of the owning client.
/// Every field is required: a key file missing any of them is a
/// permanent configuration error, surfaced at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    /// Account type, `"service_account"` for usable keys.
    #[serde(rename = "type")]
    pub key_type: String,
    /// Cloud project the agent lives in.
    pub project_id: String,
    /// Identifier of the private key within the service account.
    pub private_key_id: String,
    /// PEM-encoded RSA private key.
    pub private_key: String,
    /// Issuer identity (`iss` claim of signed assertions).
    pub client_email: String,
    /// OAuth client identifier.
    pub client_id: String,
    /// Authorization endpoint (unused by the signed-assertion flow).
    pub auth_uri: Url,
    /// Token endpoint the signed assertion is exchanged at.
    pub token_uri: Url,
    pub auth_provider_x509_cert_url: String,
    pub client_x509_cert_url: String,
}

/// Wire response from the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub scope: Option<String>,
    pub token_type: String,
    pub expires_in: i64,
}

/// A short-lived bearer token minted by the token exchanger.
///
/// Replaced atomically by the auth coordinator on every successful
/// refresh. `issued_at` is recorded client-side: the wire response only
/// carries a relative `expires_in`, so absolute expiry has to be derived
/// at receipt time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearerToken {
    /// Token string presented in the `Authorization` header.
    pub access_token: String,
    /// Token type, typically `"Bearer"`.
    pub token_type: String,
    /// Scope granted by the token endpoint, if echoed back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Validity duration in seconds, measured from issuance.
    pub expires_in: i64,
    /// Unix timestamp at which the token was received.
    pub issued_at: i64,
}

impl BearerToken {
    /// Build a token from a wire response, stamping the issuance time.
    pub fn from_response(response: TokenResponse, issued_at: i64) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            scope: response.scope,
            expires_in: response.expires_in,
            issued_at,
        }
    }

    /// Unix timestamp at which the token expires.
    #[must_use]
    pub fn expires_at(&self) -> i64 {
        self.issued_at + self.expires_in
    }

    /// Whether the token has outlived its validity window.
    ///
    /// Informational only: expiry is detected reactively through 401
    /// responses, never checked before sending.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() >= self.expires_at()
    }

    /// Header value in `"{type} {token}"` form.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_response() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#,
        )
        .unwrap();
        let token = BearerToken::from_response(response, 1_000_000);

        assert_eq!(token.header_value(), "Bearer abc");
        assert_eq!(token.expires_at(), 1_003_600);
        assert!(token.scope.is_none());
        // Issued far in the past, so it must read as expired.
        assert!(token.is_expired());
    }

    #[test]
    fn test_service_account_key_requires_private_key() {
        let json = r#"{
            "type": "service_account",
            "project_id": "p",
            "private_key_id": "k",
            "client_email": "svc@p.iam.gserviceaccount.com",
            "client_id": "123",
            "auth_uri": "https://accounts.google.com/o/oauth2/auth",
            "token_uri": "https://oauth2.googleapis.com/token",
            "auth_provider_x509_cert_url": "https://www.googleapis.com/oauth2/v1/certs",
            "client_x509_cert_url": "https://www.googleapis.com/robot/v1/metadata/x509/svc"
        }"#;
        let err = serde_json::from_str::<ServiceAccountKey>(json).unwrap_err();
        assert!(err.to_string().contains("private_key"));
    }
}
