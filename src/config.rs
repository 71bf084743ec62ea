//! Configuration constants and URL construction for the Dialogflow v2 API.

use std::time::Duration;

use crate::models::session::SessionPath;

/// Base URL of the Dialogflow v2 REST API.
pub const BASE_URL: &str = "https://dialogflow.googleapis.com/v2/";

/// OAuth scope requested for every minted token.
pub const DIALOGFLOW_SCOPE: &str = "https://www.googleapis.com/auth/dialogflow";

/// Grant type for the signed-assertion token exchange.
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime of a signed assertion (`exp` - `iat`).
pub const ASSERTION_LIFETIME: Duration = Duration::from_secs(3600);

/// Connect timeout for HTTP requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for API requests. Also bounds the token-exchange call
/// made while requests are queued behind a refresh.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Returns the `:detectIntent` URL for a session.
///
/// `base` must end with a trailing slash, as [`BASE_URL`] does.
pub fn detect_intent_url(base: &str, session: &SessionPath) -> String {
    format!("{}{}:detectIntent", base, session.as_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_intent_url() {
        let session = SessionPath::new("my-project", "abc123");
        let url = detect_intent_url(BASE_URL, &session);
        assert_eq!(
            url,
            "https://dialogflow.googleapis.com/v2/projects/my-project/agent/environments/draft/users/-/sessions/abc123:detectIntent"
        );
    }

    #[test]
    fn test_detect_intent_url_custom_base() {
        let session = SessionPath::new("p", "s");
        let url = detect_intent_url("http://127.0.0.1:9090/v2/", &session);
        assert!(url.starts_with("http://127.0.0.1:9090/v2/projects/p/"));
        assert!(url.ends_with(":detectIntent"));
    }
}
