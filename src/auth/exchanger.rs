//! Signed-assertion token exchange.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ASSERTION_LIFETIME, DIALOGFLOW_SCOPE, JWT_BEARER_GRANT_TYPE};
use crate::error::{Error, Result};
use crate::models::auth::{BearerToken, ServiceAccountKey, TokenResponse};

/// Mints a fresh bearer token from a service-account key.
///
/// Implementations must be side-effect free beyond the network call:
/// the caller (the auth coordinator) stores the result.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    /// Exchange the key for a short-lived bearer token.
    async fn exchange(&self, key: &ServiceAccountKey) -> Result<BearerToken>;

    /// Name of this exchanger implementation.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Claim set of the signed assertion.
#[derive(Debug, Serialize)]
struct Claims {
    iss: String,
    scope: String,
    aud: String,
    exp: i64,
    iat: i64,
}

/// Production exchanger: signs an RS256 assertion with the key's PEM
/// private key and form-POSTs it to the key's token endpoint.
///
/// Uses its own HTTP client so the token call never rides the
/// interceptor that triggered it.
pub struct JwtBearerExchanger {
    client: reqwest::Client,
    scope: String,
    assertion_override: Option<String>,
}

impl JwtBearerExchanger {
    /// Create an exchanger requesting the standard Dialogflow scope.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            scope: DIALOGFLOW_SCOPE.to_string(),
            assertion_override: None,
        }
    }

    /// Set the HTTP client (useful for testing or custom TLS config).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Request a non-default scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Bypass cryptographic signing and send a prebuilt assertion
    /// (primarily for tests).
    pub fn with_assertion_override(mut self, assertion: impl Into<String>) -> Self {
        self.assertion_override = Some(assertion.into());
        self
    }

    fn sign_assertion(&self, key: &ServiceAccountKey) -> Result<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            iss: key.client_email.clone(),
            scope: self.scope.clone(),
            aud: key.token_uri.to_string(),
            iat: now,
            exp: now + ASSERTION_LIFETIME.as_secs() as i64,
        };

        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| Error::TokenExchange(format!("Invalid RSA private key (PEM): {}", e)))?;

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| Error::TokenExchange(format!("Failed to sign assertion: {}", e)))
    }
}

impl Default for JwtBearerExchanger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenExchanger for JwtBearerExchanger {
    async fn exchange(&self, key: &ServiceAccountKey) -> Result<BearerToken> {
        let assertion = match &self.assertion_override {
            Some(assertion) => assertion.clone(),
            None => self.sign_assertion(key)?,
        };

        info!("Exchanging signed assertion for bearer token...");

        let form = [
            ("grant_type", JWT_BEARER_GRANT_TYPE),
            ("assertion", assertion.as_str()),
        ];

        let response = self
            .client
            .post(key.token_uri.clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::TokenExchange(format!("Token endpoint request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TokenExchange(format!(
                "Token endpoint returned {}: {}",
                status, body
            )));
        }

        let data: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::TokenExchange(format!("Failed to parse token response: {}", e)))?;

        if data.access_token.is_empty() {
            return Err(Error::TokenExchange(
                "Response does not contain access_token".into(),
            ));
        }

        debug!("Bearer token minted");
        Ok(BearerToken::from_response(
            data,
            chrono::Utc::now().timestamp(),
        ))
    }

    fn name(&self) -> &str {
        "jwt-bearer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> ServiceAccountKey {
        crate::auth::credentials::load_from_json_str(
            r#"{
                "type": "service_account",
                "project_id": "p",
                "private_key_id": "k",
                "private_key": "not a pem key",
                "client_email": "svc@p.iam.gserviceaccount.com",
                "client_id": "123",
                "auth_uri": "https://accounts.google.com/o/oauth2/auth",
                "token_uri": "https://auth.example/token",
                "auth_provider_x509_cert_url": "https://www.googleapis.com/oauth2/v1/certs",
                "client_x509_cert_url": "https://www.googleapis.com/robot/v1/metadata/x509/svc"
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_unparseable_private_key_is_exchange_error() {
        let exchanger = JwtBearerExchanger::new();
        let err = exchanger.exchange(&test_key()).await.unwrap_err();
        match err {
            Error::TokenExchange(message) => assert!(message.contains("private key")),
            other => panic!("expected token exchange error, got {:?}", other),
        }
    }

    #[test]
    fn test_scope_default() {
        let exchanger = JwtBearerExchanger::new();
        assert_eq!(exchanger.scope, DIALOGFLOW_SCOPE);
        assert_eq!(exchanger.name(), "jwt-bearer");
    }
}
