//! Token-exchange wire behavior and refresh recovery.

mod common;

use std::sync::Arc;

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dialogflow_gateway::auth::{AuthCoordinator, JwtBearerExchanger, TokenExchanger};
use dialogflow_gateway::Error;

#[tokio::test]
async fn exchange_posts_assertion_and_parses_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("assertion=test-assertion"))
        .and(body_string_contains("grant_type="))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "abc",
            "scope": "https://www.googleapis.com/auth/dialogflow",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key = common::service_account_key(&format!("{}/token", server.uri()));
    let exchanger = JwtBearerExchanger::new().with_assertion_override("test-assertion");

    let token = exchanger.exchange(&key).await.unwrap();
    assert_eq!(token.access_token, "abc");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.header_value(), "Bearer abc");

    let now = chrono::Utc::now().timestamp();
    assert!(token.expires_at() > now + 3500 && token.expires_at() <= now + 3600);
}

#[tokio::test]
async fn exchange_rejection_is_token_exchange_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_grant"))
        .expect(1)
        .mount(&server)
        .await;

    let key = common::service_account_key(&format!("{}/token", server.uri()));
    let exchanger = JwtBearerExchanger::new().with_assertion_override("test-assertion");

    match exchanger.exchange(&key).await.unwrap_err() {
        Error::TokenExchange(message) => {
            assert!(message.contains("400"));
            assert!(message.contains("invalid_grant"));
        }
        other => panic!("expected token exchange error, got {:?}", other),
    }
}

#[tokio::test]
async fn exchange_unparseable_body_is_token_exchange_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let key = common::service_account_key(&format!("{}/token", server.uri()));
    let exchanger = JwtBearerExchanger::new().with_assertion_override("test-assertion");

    match exchanger.exchange(&key).await.unwrap_err() {
        Error::TokenExchange(message) => assert!(message.contains("parse")),
        other => panic!("expected token exchange error, got {:?}", other),
    }
}

#[tokio::test]
async fn coordinator_recovers_after_rejected_refresh() {
    let server = MockServer::start().await;

    // First exchange is rejected, the one after succeeds.
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_grant"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "abc",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key = common::service_account_key(&format!("{}/token", server.uri()));
    let exchanger = Arc::new(JwtBearerExchanger::new().with_assertion_override("test-assertion"));
    let coordinator = AuthCoordinator::new(key, exchanger);

    let err = coordinator.handle_unauthorized().await.unwrap_err();
    assert!(matches!(err, Error::TokenExchange(_)));
    assert!(coordinator.authorization_header().await.is_none());

    // Not wedged: the next 401 starts a fresh exchange.
    coordinator.handle_unauthorized().await.unwrap();
    assert_eq!(
        coordinator.authorization_header().await.as_deref(),
        Some("Bearer abc")
    );
}
