//! Main client entry point.

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::detect_intent::DetectIntentRequestBuilder;
use crate::auth::{AuthCoordinator, JwtBearerExchanger, TokenExchanger};
use crate::error::{Error, Result};
use crate::models::auth::ServiceAccountKey;
use crate::models::request::DetectIntentRequest;
use crate::models::response::DetectIntentResponse;
use crate::models::session::SessionPath;
use crate::transport::HttpClient;

/// Dialogflow v2 API client.
///
/// # Examples
///
/// ```rust,no_run
/// use dialogflow_gateway::{DialogflowClient, SessionPath};
///
/// # async fn example() -> dialogflow_gateway::Result<()> {
/// let client = DialogflowClient::builder()
///     .credentials_file("~/.config/my-agent/service-account.json")
///     .build()?;
///
/// let session = SessionPath::new("my-project", "session-1");
/// let response = client.detect_intent(session)
///     .text("book a table for two", "en")
///     .send()
///     .await?;
///
/// println!("{:?}", response.query_result.fulfillment_text);
/// # Ok(())
/// # }
/// ```
pub struct DialogflowClient {
    auth: Arc<AuthCoordinator>,
    http: Arc<HttpClient>,
    base_url: String,
}

impl DialogflowClient {
    /// Create a builder for configuring the client.
    pub fn builder() -> DialogflowClientBuilder {
        DialogflowClientBuilder::new()
    }

    /// Start building a detect-intent request for a session.
    pub fn detect_intent(&self, session: SessionPath) -> DetectIntentRequestBuilder<'_> {
        DetectIntentRequestBuilder::new(self, session)
    }

    /// Send a detect-intent request and decode the response.
    pub async fn send_detect_intent(
        &self,
        session: &SessionPath,
        request: DetectIntentRequest,
    ) -> Result<DetectIntentResponse> {
        let url = crate::config::detect_intent_url(&self.base_url, session);

        debug!(session = %session, "Sending detectIntent request");

        let response = self.http.post_json(&url, &request).await?;
        let body: DetectIntentResponse = response.json().await.map_err(Error::Network)?;
        Ok(body)
    }

    /// Get a reference to the auth coordinator.
    pub fn auth(&self) -> &AuthCoordinator {
        &self.auth
    }

    /// Base URL requests are built against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for DialogflowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogflowClient")
            .field("auth", &self.auth)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`DialogflowClient`].
pub struct DialogflowClientBuilder {
    credentials_file: Option<String>,
    credentials: Option<ServiceAccountKey>,
    base_url: Option<String>,
    exchanger: Option<Arc<dyn TokenExchanger>>,
    reqwest_client: Option<reqwest::Client>,
}

impl DialogflowClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            credentials_file: None,
            credentials: None,
            base_url: None,
            exchanger: None,
            reqwest_client: None,
        }
    }

    /// Load the service-account key from a JSON file.
    pub fn credentials_file(mut self, path: impl Into<String>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Use an already-loaded service-account key.
    pub fn credentials(mut self, key: ServiceAccountKey) -> Self {
        self.credentials = Some(key);
        self
    }

    /// Override the API base URL (must end with a trailing slash).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a custom token exchanger.
    pub fn exchanger(mut self, exchanger: Arc<dyn TokenExchanger>) -> Self {
        self.exchanger = Some(exchanger);
        self
    }

    /// Set a custom reqwest client for API requests.
    pub fn reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.reqwest_client = Some(client);
        self
    }

    /// Build the client, loading and validating credentials.
    ///
    /// Credential load failures surface here, before any request is
    /// attempted.
    pub fn build(self) -> Result<DialogflowClient> {
        let key = self.load_credentials()?;

        let exchanger = self
            .exchanger
            .unwrap_or_else(|| Arc::new(JwtBearerExchanger::new()));
        let auth = Arc::new(AuthCoordinator::new(key, exchanger));

        let http = match self.reqwest_client {
            Some(client) => HttpClient::with_client(client, Arc::clone(&auth)),
            None => HttpClient::new(Arc::clone(&auth)),
        };

        let base_url = self
            .base_url
            .unwrap_or_else(|| crate::config::BASE_URL.to_string());
        if !base_url.ends_with('/') {
            return Err(Error::Config(format!(
                "Base URL must end with a trailing slash: {}",
                base_url
            )));
        }

        info!("DialogflowClient initialized");
        Ok(DialogflowClient {
            auth,
            http: Arc::new(http),
            base_url,
        })
    }

    fn load_credentials(&self) -> Result<ServiceAccountKey> {
        // Priority: explicit key > JSON file > environment

        if let Some(key) = &self.credentials {
            return Ok(key.clone());
        }

        if let Some(path) = &self.credentials_file {
            return crate::auth::credentials::load_from_json_file(path);
        }

        if let Some(result) = crate::auth::credentials::load_from_env() {
            return result;
        }

        Err(Error::MissingCredential(
            "Provide a service account key, a credentials file, or GOOGLE_APPLICATION_CREDENTIALS"
                .into(),
        ))
    }
}

impl Default for DialogflowClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
