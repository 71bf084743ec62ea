//! HTTP client with 401-triggered token refresh.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::AuthCoordinator;
use crate::config::{CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use crate::error::{Error, Result};

/// HTTP client for the Dialogflow API with refresh-and-replay logic.
///
/// Every request passes through the coordinator twice: the header-attach
/// step on the way out and the 401 intercept on the way back. All other
/// responses and network failures pass through untouched.
pub struct HttpClient {
    client: reqwest::Client,
    auth: Arc<AuthCoordinator>,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(auth: Arc<AuthCoordinator>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, auth }
    }

    /// Create with a custom reqwest client.
    pub fn with_client(client: reqwest::Client, auth: Arc<AuthCoordinator>) -> Self {
        Self { client, auth }
    }

    /// Send a JSON POST request with automatic refresh-and-replay.
    ///
    /// A 401 triggers one shared token refresh and a single replay; the
    /// replay picks up whatever token the refresh stored. Any other
    /// non-2xx status resolves immediately as [`Error::Api`], and
    /// network errors as [`Error::Network`]; neither touches the
    /// refresh protocol.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        for attempt in 0..2 {
            let mut request = self.client.post(url).json(body);
            if let Some(value) = self.auth.authorization_header().await {
                request = request.header(reqwest::header::AUTHORIZATION, value);
            } else {
                debug!("No bearer token held - sending unauthenticated");
            }

            let response = request.send().await.map_err(Error::Network)?;
            let status = response.status().as_u16();

            if response.status().is_success() {
                return Ok(response);
            }

            if status == 401 && attempt == 0 {
                warn!("Got 401 - refreshing token and replaying request");
                self.auth.handle_unauthorized().await?;
                continue;
            }

            let body_text = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body_text,
            });
        }

        Err(Error::Api {
            status: 401,
            message: "Unauthorized after token refresh".into(),
        })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").field("auth", &self.auth).finish()
    }
}
